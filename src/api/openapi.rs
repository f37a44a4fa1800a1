//! OpenAPI documentation, served as JSON at `/openapi.json`.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use crate::api::handlers::{base_handler, health_handler};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::ErrorResponse;
use crate::services::StatusMessage;

/// OpenAPI documentation for the base service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "base service api",
        description = "Template service for building web services"
    ),
    paths(
        base_handler::home,
        base_handler::get_user,
        health_handler::health_check,
    ),
    components(
        schemas(
            StatusMessage,
            User,
            health_handler::HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "base_api", description = "Status, health and user lookup")
    )
)]
pub struct ApiDoc;

/// Route serving the generated document
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
