//! Integration tests for API endpoints.
//!
//! Each test drives the real router against a SQLite file in a temp dir.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

use base_service::{create_router, AppState, Database, Settings};

// =============================================================================
// Test Helpers
// =============================================================================

fn settings(pairs: &[(&str, &str)]) -> Settings {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| map.get(key).cloned())
}

/// Router backed by a fresh database; keep the TempDir alive for the test.
fn setup_app(pairs: &[(&str, &str)]) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let database = Database::new(dir.path().join("app.db"));
    (create_router(AppState::new(settings(pairs), database)), dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "status": "healthy", "service": "prompt_api" }));
}

#[tokio::test]
async fn test_health_ignores_database_state() {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::new(dir.path().join("missing").join("app.db"));
    let app = create_router(AppState::new(Settings::default(), database));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Root Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_embeds_external_url() {
    let (app, _dir) = setup_app(&[("GITHUB_URL", "https://github.com/acme/base")]);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body,
        json!({ "base project": "Base project working...https://github.com/acme/base" })
    );
}

#[tokio::test]
async fn test_root_without_external_url() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["base project"], "Base project working...");
}

#[tokio::test]
async fn test_root_reports_unopenable_database_as_500() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist, so the file cannot be created.
    let database = Database::new(dir.path().join("missing").join("app.db"));
    let app = create_router(AppState::new(Settings::default(), database));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "detail": "A database error occurred" }));
}

#[tokio::test]
async fn test_root_creates_database_file() {
    let (app, dir) = setup_app(&[]);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(dir.path().join("app.db").exists());
}

// =============================================================================
// User Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_get_user_echoes_name() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/user/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "name": "alice" }));
}

#[tokio::test]
async fn test_get_user_decodes_reserved_characters() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/user/a%20b%3Fc%26d")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "a b?c&d");
}

#[tokio::test]
async fn test_get_user_unicode() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/user/j%C3%BCrgen")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "jürgen");
}

#[tokio::test]
async fn test_get_user_database_failure_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::new(dir.path().join("missing").join("app.db"));
    let app = create_router(AppState::new(Settings::default(), database));

    let response = app.oneshot(get("/user/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "detail": "A database error occurred" }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// OpenAPI Tests
// =============================================================================

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["info"]["title"], "base service api");
    assert!(body["paths"]["/"].is_object());
    assert!(body["paths"]["/health"].is_object());
    assert!(body["paths"]["/user/{username}"].is_object());
}

// =============================================================================
// CORS Tests
// =============================================================================

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/health")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_allows_localhost_origin() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(preflight("http://localhost:5173")).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "x-custom-header"
    );
}

#[tokio::test]
async fn test_cors_rejects_foreign_origin() {
    let (app, _dir) = setup_app(&[]);

    let response = app.oneshot(preflight("http://example.com")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
