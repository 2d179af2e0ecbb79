use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::dto::users::UsersQuery;
use crate::forms::users::AddUserForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{error_response, parse_query};
use crate::services::users as users_service;

#[get("/users")]
pub async fn list_users(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query: UsersQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match users_service::list_users(repo.get_ref(), &query, server_config.users_page_size) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list users"),
    }
}

#[post("/users")]
pub async fn add_user(
    repo: web::Data<InMemoryRepository>,
    web::Form(form): web::Form<AddUserForm>,
) -> impl Responder {
    match users_service::add_user(repo.get_ref(), form) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response(err, "add user"),
    }
}

#[post("/users/{user_id}/toggle")]
pub async fn toggle_user(
    user_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match users_service::toggle_user(repo.get_ref(), &user_id) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(err, "toggle user"),
    }
}
