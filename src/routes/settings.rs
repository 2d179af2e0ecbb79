//! Settings panels. Every catalog shares the same list, create, update and
//! delete endpoints; locations and documents can also be toggled.

use actix_web::{HttpResponse, Responder, Scope, web};
use serde::Serialize;

use crate::domain::settings::{Activatable, CatalogEntry};
use crate::forms::settings::{
    CallStateForm, CatalogForm, KnowledgeDocumentForm, LocationForm, PriorityForm,
};
use crate::repository::{CatalogReader, CatalogToggle, CatalogWriter, InMemoryRepository};
use crate::routes::error_response;
use crate::services::settings as settings_service;

pub fn scope() -> Scope {
    web::scope("/settings")
        .service(catalog::<PriorityForm>("/priorities"))
        .service(catalog::<CallStateForm>("/call-states"))
        .service(toggleable_catalog::<LocationForm>("/locations"))
        .service(toggleable_catalog::<KnowledgeDocumentForm>("/documents"))
}

fn catalog<F>(path: &str) -> Scope
where
    F: CatalogForm + 'static,
    F::Entry: Serialize + 'static,
    InMemoryRepository: CatalogReader<F::Entry> + CatalogWriter<F::Entry>,
{
    web::scope(path)
        .service(
            web::resource("")
                .route(web::get().to(list_entries::<F::Entry>))
                .route(web::post().to(create_entry::<F>)),
        )
        .service(
            web::resource("/{entry_id}")
                .route(web::put().to(update_entry::<F>))
                .route(web::delete().to(delete_entry::<F::Entry>)),
        )
}

fn toggleable_catalog<F>(path: &str) -> Scope
where
    F: CatalogForm + 'static,
    F::Entry: Activatable + Serialize + 'static,
    InMemoryRepository:
        CatalogReader<F::Entry> + CatalogWriter<F::Entry> + CatalogToggle<F::Entry>,
{
    catalog::<F>(path).route("/{entry_id}/toggle", web::post().to(toggle_entry::<F::Entry>))
}

async fn list_entries<T>(repo: web::Data<InMemoryRepository>) -> impl Responder
where
    T: CatalogEntry + Serialize,
    InMemoryRepository: CatalogReader<T>,
{
    match settings_service::list_entries::<T, _>(repo.get_ref()) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err) => error_response(err, "list settings"),
    }
}

async fn create_entry<F>(
    repo: web::Data<InMemoryRepository>,
    web::Form(form): web::Form<F>,
) -> impl Responder
where
    F: CatalogForm,
    F::Entry: Serialize,
    InMemoryRepository: CatalogWriter<F::Entry>,
{
    match settings_service::create_entry(repo.get_ref(), form) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(err) => error_response(err, "create setting"),
    }
}

async fn update_entry<F>(
    entry_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    web::Form(form): web::Form<F>,
) -> impl Responder
where
    F: CatalogForm,
    F::Entry: Serialize,
    InMemoryRepository: CatalogWriter<F::Entry>,
{
    match settings_service::update_entry(repo.get_ref(), &entry_id, form) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(err) => error_response(err, "update setting"),
    }
}

async fn delete_entry<T>(
    entry_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder
where
    T: CatalogEntry,
    InMemoryRepository: CatalogWriter<T>,
{
    match settings_service::delete_entry::<T, _>(repo.get_ref(), &entry_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete setting"),
    }
}

async fn toggle_entry<T>(
    entry_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder
where
    T: CatalogEntry + Activatable + Serialize,
    InMemoryRepository: CatalogToggle<T>,
{
    match settings_service::toggle_entry::<T, _>(repo.get_ref(), &entry_id) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(err) => error_response(err, "toggle setting"),
    }
}
