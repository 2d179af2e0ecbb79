use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::chats::ChatsQuery;
use crate::repository::InMemoryRepository;
use crate::routes::{error_response, parse_query};
use crate::services::chats as chats_service;

#[get("/chats")]
pub async fn list_chats(req: HttpRequest, repo: web::Data<InMemoryRepository>) -> impl Responder {
    let query: ChatsQuery = match parse_query(&req) {
        Ok(query) => query,
        Err(response) => return response,
    };

    match chats_service::list_chats(repo.get_ref(), &query) {
        Ok(chats) => HttpResponse::Ok().json(chats),
        Err(err) => error_response(err, "list chats"),
    }
}

#[get("/chats/{chat_id}")]
pub async fn show_chat(
    chat_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match chats_service::get_chat(repo.get_ref(), &chat_id) {
        Ok(chat) => HttpResponse::Ok().json(chat),
        Err(err) => error_response(err, "load chat"),
    }
}
