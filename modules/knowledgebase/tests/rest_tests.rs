//! Integration tests for the admin REST surface

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use knowledgebase::domain::Service;
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::{MockArticlesRepo, MockOptionsRepo};

const ADMIN_PATH: &str = "/settings";

fn build_app() -> (Router, Arc<Service>) {
    let options = MockOptionsRepo::new();
    let articles = MockArticlesRepo::new();
    let service = Arc::new(Service::new(
        Arc::new(options),
        Arc::new(articles),
        ADMIN_PATH,
    ));
    let router =
        knowledgebase::api::rest::routes::register_routes(Router::new(), service.clone());
    (router, service)
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri("/settings")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("x-user-id", "7")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-user-id", "7")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn get_settings_returns_ok() {
    let (app, _) = build_app();

    let response = app.oneshot(get_request("/settings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn save_redirects_back_to_settings_page() {
    let (app, service) = build_app();

    let body = "menu_page_title=Docs&menu_position=5&post_type=client_reference";
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/settings?settings-updated=true"
    );

    // The outcome landed in the caller's mailbox
    let status = service.take_user_status(7).await.unwrap().unwrap();
    assert!(status.status);
}

#[tokio::test]
async fn save_without_identity_is_rejected() {
    let (app, _) = build_app();

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/settings")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("menu_page_title=Docs"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_page_load_consumes_mailbox() {
    let (app, service) = build_app();

    let body = "menu_page_title=Docs&menu_position=5&post_type=client_reference";
    let response = app
        .clone()
        .oneshot(form_request(body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(get_request("/settings?settings-updated=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Read-once: the page load cleared the entry
    assert_eq!(service.take_user_status(7).await.unwrap(), None);
}

#[tokio::test]
async fn slug_change_redirects_next_page_load_once() {
    let (app, _) = build_app();

    let body = "menu_page_title=Docs&menu_position=5&post_type=kb";
    let response = app.clone().oneshot(form_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Next admin page load hits the guard
    let response = app
        .clone()
        .oneshot(get_request("/settings?settings-updated=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/settings?post_type=kb&settings-updated=true"
    );

    // The load after that passes through
    let response = app
        .oneshot(get_request("/settings?settings-updated=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn fields_and_articles_endpoints_respond() {
    let (app, _) = build_app();

    let response = app
        .clone()
        .oneshot(get_request("/settings/fields"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get_request("/articles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/articles/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
