use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::roster::{ClientsQuery, FollowUpQuery};
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{error_response, parse_query};
use crate::services::roster as roster_service;
use crate::session::SessionStore;

#[get("/clients")]
pub async fn list_clients(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query: ClientsQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match roster_service::list_clients(
        repo.get_ref(),
        sessions.get_ref(),
        &query,
        server_config.page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list clients"),
    }
}

#[get("/clients/follow-up")]
pub async fn follow_up(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query: FollowUpQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match roster_service::list_follow_up(
        repo.get_ref(),
        sessions.get_ref(),
        &query,
        server_config.page_size,
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list follow-up clients"),
    }
}

/// Downloads the filtered roster, all pages included.
#[get("/clients/export")]
pub async fn export_clients(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let query: ClientsQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match roster_service::export_clients(repo.get_ref(), sessions.get_ref(), &query) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename("clientes.csv".to_string())],
            })
            .body(csv),
        Err(err) => error_response(err, "export clients"),
    }
}

#[get("/clients/options")]
pub async fn filter_options(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match roster_service::filter_options(repo.get_ref()) {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(err) => error_response(err, "load filter options"),
    }
}
