//! Endpoint behavior decided before (or without) a working database.

mod common;

use axum::{body::Body, http::Request, http::StatusCode, middleware, routing, Router};
use blogful::middleware::{handle_server_errors, panic_response};
use blogful::Environment;
use common::{get, offline_app, post_json, send};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

#[tokio::test]
async fn post_reports_first_missing_field_in_order() {
    let full = json!({"title": "Test new article", "style": "Listicle", "content": "Test new article content..."});
    for field in ["title", "style", "content"] {
        let mut body = full.clone();
        body.as_object_mut().unwrap().remove(field);
        let res = send(offline_app(Environment::Test), post_json("/articles", &body)).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "without {}", field);
        assert_eq!(
            res.json(),
            json!({"error": {"message": format!("Missing '{}' in request body", field)}})
        );
    }

    let res = send(offline_app(Environment::Test), post_json("/articles", &json!({"content": "only"}))).await;
    assert_eq!(res.json()["error"]["message"], "Missing 'title' in request body");
}

#[tokio::test]
async fn post_with_empty_field_is_a_client_error() {
    let body = json!({"title": "t", "style": "", "content": "c"});
    let res = send(offline_app(Environment::Production), post_json("/articles", &body)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"]["message"], "Missing 'style' in request body");
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let req = Request::builder()
        .method("POST")
        .uri("/articles")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let res = send(offline_app(Environment::Test), req).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["error"]["message"].is_string());
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let res = send(offline_app(Environment::Test), get("/articles/not-a-number")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({"error": {"message": "Article doesn't exist"}}));

    let res = send(offline_app(Environment::Test), common::delete("/articles/99999999999")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let res = send(offline_app(Environment::Test), get("/articlces")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({"error": {"message": "Not found"}}));
}

#[tokio::test]
async fn storage_failure_is_generic_in_production() {
    let res = send(offline_app(Environment::Production), get("/articles")).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({"error": {"message": "server error"}}));
}

#[tokio::test]
async fn storage_failure_is_detailed_outside_production() {
    let res = send(offline_app(Environment::Development), get("/articles/1")).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json();
    assert!(body["message"].as_str().unwrap().starts_with("database: "));
    assert_eq!(body["error"]["kind"], "database_error");
}

#[tokio::test]
async fn valid_post_reaches_storage() {
    let body = json!({"title": "T", "style": "How-to", "content": "<script>alert(1)</script>"});
    let res = send(offline_app(Environment::Production), post_json("/articles", &body)).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({"error": {"message": "server error"}}));
}

#[tokio::test]
async fn users_listing_fails_cleanly_without_storage() {
    let res = send(offline_app(Environment::Production), get("/users")).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_readiness_and_headers() {
    let res = send(offline_app(Environment::Test), get("/health")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"status": "ok"}));
    assert_eq!(res.headers["x-content-type-options"], "nosniff");
    assert_eq!(res.headers["x-frame-options"], "SAMEORIGIN");

    let res = send(offline_app(Environment::Test), get("/ready")).await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.json()["database"], "unavailable");

    let res = send(offline_app(Environment::Test), get("/version")).await;
    assert_eq!(res.json()["name"], "blogful");
}

async fn boom() -> &'static str {
    panic!("boom")
}

fn panicking_app(environment: Environment) -> Router {
    Router::new()
        .route("/boom", routing::get(boom))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(environment, handle_server_errors))
}

#[tokio::test]
async fn panics_go_through_the_error_handler() {
    let res = send(panicking_app(Environment::Development), get("/boom")).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json()["message"], "internal: boom");

    let res = send(panicking_app(Environment::Production), get("/boom")).await;
    assert_eq!(res.json(), json!({"error": {"message": "server error"}}));
}

#[tokio::test]
async fn unsupported_method_gets_json_error_body() {
    let req = Request::builder()
        .method("PUT")
        .uri("/articles/1")
        .body(Body::empty())
        .unwrap();
    let res = send(offline_app(Environment::Test), req).await;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers["content-type"], "application/json");
    assert_eq!(res.json(), json!({"error": {"message": "Method Not Allowed"}}));
}

#[tokio::test]
async fn oversized_body_is_rejected_with_json_error() {
    let body = json!({
        "title": "Too long",
        "style": "Story",
        "content": "x".repeat(200 * 1024),
    });
    let res = send(offline_app(Environment::Test), post_json("/articles", &body)).await;
    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(res.json()["error"]["message"].is_string());
}
