//! Status and user lookup handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::services::{BaseService, StatusMessage};

/// Create base routes
pub fn base_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/user/:username", get(get_user))
}

/// Service status message
///
/// Failures computing the message are reported as 404. Failures opening or
/// committing the connection surface as 500.
#[utoipa::path(
    get,
    path = "/",
    tag = "base_api",
    responses(
        (status = 200, description = "Service status", body = StatusMessage),
        (status = 404, description = "Status could not be computed", body = crate::errors::ErrorResponse),
        (status = 500, description = "Database unavailable", body = crate::errors::ErrorResponse)
    )
)]
pub async fn home(State(state): State<AppState>) -> AppResult<Json<StatusMessage>> {
    let settings = state.settings.clone();

    let status = crate::with_connection!(state.database, false, |conn| {
        BaseService::new(conn, &settings).status().map_err(|e| {
            tracing::warn!("Status request failed: {}", e);
            AppError::PromptNotFound
        })
    })?;

    Ok(Json(status))
}

/// Look up a user by name
#[utoipa::path(
    get,
    path = "/user/{username}",
    tag = "base_api",
    params(
        ("username" = String, Path, description = "User name")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 500, description = "Internal error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let settings = state.settings.clone();

    let user = crate::with_connection!(state.database, false, |conn| {
        Ok(BaseService::new(conn, &settings).get_user(&username))
    })?;

    Ok(Json(user))
}
