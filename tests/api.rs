use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::Value;

use orbit_crm::models::config::ServerConfig;
use orbit_crm::repository::InMemoryRepository;
use orbit_crm::routes;
use orbit_crm::session::SessionStore;

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        page_size: 10,
        users_page_size: 10,
        new_clients_window_days: 30,
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(InMemoryRepository::demo()))
                .app_data(web::Data::new(SessionStore::new()))
                .app_data(web::Data::new(server_config()))
                .configure(routes::configure),
        )
        .await
    };
}

macro_rules! open_session {
    ($app:expr) => {{
        let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn clients_are_paginated() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/clients?page=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_items"], 15);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["page"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn out_of_range_page_is_clamped() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/clients?location=Bogot%C3%A1&page=9")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["page"], 1);
    assert_eq!(body["items"][0]["client"]["id"], "10");
}

#[actix_web::test]
async fn malformed_query_is_a_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/clients?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn export_returns_csv_with_header() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/export?agent=Mafe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("id,name,phone,location"));
    assert_eq!(lines.len(), 3);
}

#[actix_web::test]
async fn edits_stay_pending_until_committed() {
    let app = init_app!();
    let session = open_session!(app);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/edits/4"))
        .set_form([("field", "call_status"), ("value", "contacted")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/clients?session={session}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let row = &body["items"][3];
    assert_eq!(row["client"]["call_status"], "contacted");
    assert_eq!(row["edited"], true);

    let req = test::TestRequest::get().uri("/api/v1/clients").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"][3]["client"]["call_status"], "not_contacted");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/commit"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["committed"], 1);

    let req = test::TestRequest::get().uri("/api/v1/clients").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"][3]["client"]["call_status"], "contacted");
}

#[actix_web::test]
async fn editing_an_unknown_client_is_not_found() {
    let app = init_app!();
    let session = open_session!(app);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/edits/999"))
        .set_form([("field", "call_status"), ("value", "contacted")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_session_id_is_a_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn select_all_follows_the_filters() {
    let app = init_app!();
    let session = open_session!(app);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/v1/sessions/{session}/selection/all?priority=Alta"
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["selected"], serde_json::json!(["10", "11", "13"]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/sessions/{session}/selection"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["selected"], serde_json::json!([]));
}

#[actix_web::test]
async fn broadcast_wizard_requires_a_template() {
    let app = init_app!();
    let session = open_session!(app);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/broadcast/continue"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/broadcast/template"))
        .set_form([("template_id", "2")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/broadcast/continue"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{session}/broadcast/send"))
        .set_form([("audience", "follow_up")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["recipients"].as_array().unwrap().len(), 7);

    let req = test::TestRequest::get().uri("/api/v1/broadcasts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn invalid_settings_form_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/settings/priorities")
        .set_form([("name", ""), ("color", "#10b981")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "El nombre es requerido");

    let req = test::TestRequest::get()
        .uri("/api/v1/settings/priorities")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn locations_can_be_toggled() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/settings/locations/2/toggle")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Bogotá");
    assert_eq!(body["active"], false);

    let req = test::TestRequest::delete()
        .uri("/api/v1/settings/locations/missing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_user_email_is_rejected() {
    let app = init_app!();

    let form = [("name", "Laura"), ("email", "laura@orbit.com")];
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn dashboard_and_chats_are_served() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_clients"], 15);
    assert_eq!(body["registered_clients"], 4);

    let req = test::TestRequest::get()
        .uri("/api/v1/chats?search=aldair")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/api/v1/chats/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
