//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{base_routes, health_routes};
use super::middleware::cors_layer;
use super::openapi::openapi_routes;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(base_routes())
        .merge(health_routes())
        .merge(openapi_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
