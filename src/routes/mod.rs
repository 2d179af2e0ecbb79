//! JSON API of the dashboard, mounted under `/api/v1`.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::services::ServiceError;
use crate::session::SessionId;

pub mod broadcast;
pub mod chats;
pub mod clients;
pub mod dashboard;
pub mod sessions;
pub mod settings;
pub mod users;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn json_error(status: actix_web::http::StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error: message })
}

/// Maps a service failure to its HTTP answer. Validation messages are
/// returned to the operator as a transient notification.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    use actix_web::http::StatusCode;

    match err {
        ServiceError::Form(message) => json_error(StatusCode::UNPROCESSABLE_ENTITY, &message),
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, "No encontrado"),
        ServiceError::TypeConstraint(message) => json_error(StatusCode::BAD_REQUEST, &message),
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Parses the query string with repeated keys and empty values read as
/// absent.
pub fn parse_query<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, HttpResponse> {
    serde_html_form::from_str(req.query_string()).map_err(|err| {
        json_error(
            actix_web::http::StatusCode::BAD_REQUEST,
            &format!("Parámetros inválidos: {err}"),
        )
    })
}

pub fn parse_session(raw: &str) -> Result<SessionId, HttpResponse> {
    raw.parse::<SessionId>()
        .map_err(|err| error_response(ServiceError::from(err), "parse session id"))
}

/// Registers every endpoint. Shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(clients::list_clients)
            .service(clients::follow_up)
            .service(clients::export_clients)
            .service(clients::filter_options)
            .service(sessions::open_session)
            .service(sessions::show_session)
            .service(sessions::close_session)
            .service(sessions::toggle_selection)
            .service(sessions::select_all)
            .service(sessions::clear_selection)
            .service(sessions::commit_edits)
            .service(sessions::edit_field)
            .service(sessions::reset_edits)
            .service(sessions::reset_record_edits)
            .service(broadcast::list_templates)
            .service(broadcast::list_broadcasts)
            .service(broadcast::select_template)
            .service(broadcast::continue_wizard)
            .service(broadcast::send_broadcast)
            .service(broadcast::reset_wizard)
            .service(users::list_users)
            .service(users::add_user)
            .service(users::toggle_user)
            .service(dashboard::show_dashboard)
            .service(chats::list_chats)
            .service(chats::show_chat)
            .service(settings::scope()),
    );
}
