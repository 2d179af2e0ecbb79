use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::broadcast::{SelectTemplateForm, SendBroadcastForm};
use crate::repository::InMemoryRepository;
use crate::routes::{error_response, parse_session};
use crate::services::broadcast as broadcast_service;
use crate::session::SessionStore;

#[get("/templates")]
pub async fn list_templates(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match broadcast_service::list_templates(repo.get_ref()) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(err) => error_response(err, "list templates"),
    }
}

#[get("/broadcasts")]
pub async fn list_broadcasts(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match broadcast_service::list_broadcasts(repo.get_ref()) {
        Ok(broadcasts) => HttpResponse::Ok().json(broadcasts),
        Err(err) => error_response(err, "list broadcasts"),
    }
}

#[post("/sessions/{session_id}/broadcast/template")]
pub async fn select_template(
    session_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
    web::Form(form): web::Form<SelectTemplateForm>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match broadcast_service::select_template(repo.get_ref(), sessions.get_ref(), &id, form) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "select template"),
    }
}

#[post("/sessions/{session_id}/broadcast/continue")]
pub async fn continue_wizard(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match broadcast_service::continue_wizard(sessions.get_ref(), &id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "continue broadcast"),
    }
}

#[post("/sessions/{session_id}/broadcast/send")]
pub async fn send_broadcast(
    session_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
    web::Form(form): web::Form<SendBroadcastForm>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match broadcast_service::send_broadcast(repo.get_ref(), sessions.get_ref(), &id, form) {
        Ok(broadcast) => HttpResponse::Created().json(broadcast),
        Err(err) => error_response(err, "send broadcast"),
    }
}

#[delete("/sessions/{session_id}/broadcast")]
pub async fn reset_wizard(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match broadcast_service::reset_wizard(sessions.get_ref(), &id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "reset broadcast"),
    }
}
