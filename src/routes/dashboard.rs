use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;

use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::dashboard as dashboard_service;

#[get("/dashboard")]
pub async fn show_dashboard(
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let today = Local::now().date_naive();

    match dashboard_service::dashboard_stats(
        repo.get_ref(),
        today,
        server_config.new_clients_window_days,
    ) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_response(err, "compute dashboard"),
    }
}
