//! Operator sessions: selection and pending inline edits.

use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, web};

use crate::domain::types::ClientId;
use crate::dto::roster::ClientsQuery;
use crate::forms::roster::{EditFieldForm, ToggleSelectionForm};
use crate::repository::InMemoryRepository;
use crate::routes::{error_response, parse_query, parse_session};
use crate::services::{ServiceError, session as session_service};
use crate::session::SessionStore;

#[post("/sessions")]
pub async fn open_session(sessions: web::Data<SessionStore>) -> impl Responder {
    match session_service::open_session(sessions.get_ref()) {
        Ok(data) => HttpResponse::Created().json(data),
        Err(err) => error_response(err, "open session"),
    }
}

#[get("/sessions/{session_id}")]
pub async fn show_session(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::get_session(sessions.get_ref(), &id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "load session"),
    }
}

#[delete("/sessions/{session_id}")]
pub async fn close_session(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::close_session(sessions.get_ref(), &id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "close session"),
    }
}

#[post("/sessions/{session_id}/selection/toggle")]
pub async fn toggle_selection(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
    web::Form(form): web::Form<ToggleSelectionForm>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::toggle_selection(sessions.get_ref(), &id, form) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "toggle selection"),
    }
}

/// Selects every record matching the filters in the query string.
#[post("/sessions/{session_id}/selection/all")]
pub async fn select_all(
    req: HttpRequest,
    session_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let query: ClientsQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match session_service::select_all(repo.get_ref(), sessions.get_ref(), &id, &query) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "select all clients"),
    }
}

#[delete("/sessions/{session_id}/selection")]
pub async fn clear_selection(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::clear_selection(sessions.get_ref(), &id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "clear selection"),
    }
}

#[post("/sessions/{session_id}/commit")]
pub async fn commit_edits(
    session_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::commit_edits(repo.get_ref(), sessions.get_ref(), &id) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response(err, "commit edits"),
    }
}

#[post("/sessions/{session_id}/edits/{client_id}")]
pub async fn edit_field(
    path: web::Path<(String, String)>,
    repo: web::Data<InMemoryRepository>,
    sessions: web::Data<SessionStore>,
    web::Form(form): web::Form<EditFieldForm>,
) -> impl Responder {
    let (session_id, client_id) = path.into_inner();
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let client_id = match ClientId::new(client_id) {
        Ok(client_id) => client_id,
        Err(err) => return error_response(ServiceError::from(err), "edit client"),
    };

    match session_service::edit_field(repo.get_ref(), sessions.get_ref(), &id, &client_id, form) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "edit client"),
    }
}

#[delete("/sessions/{session_id}/edits")]
pub async fn reset_edits(
    session_id: web::Path<String>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match session_service::reset_edits(sessions.get_ref(), &id, None) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "reset edits"),
    }
}

#[delete("/sessions/{session_id}/edits/{client_id}")]
pub async fn reset_record_edits(
    path: web::Path<(String, String)>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let (session_id, client_id) = path.into_inner();
    let id = match parse_session(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let client_id = match ClientId::new(client_id) {
        Ok(client_id) => client_id,
        Err(err) => return error_response(ServiceError::from(err), "reset client edits"),
    };

    match session_service::reset_edits(sessions.get_ref(), &id, Some(&client_id)) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err, "reset client edits"),
    }
}
