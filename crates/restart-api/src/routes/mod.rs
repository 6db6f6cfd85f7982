//! API route handlers

pub mod health;
pub mod lock;
pub mod page;
pub mod wallet;

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::dto::ApiError;
use crate::AppState;

/// Error half of every handler result
pub type ErrorResponse = (StatusCode, Json<ApiError>);

/// Pair an API error body with its HTTP status
pub(crate) fn error_response(status: u16, body: ApiError) -> ErrorResponse {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body))
}

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health_check))
        .route("/info", get(health::info))
        .nest("/wallet", wallet::router())
        .nest("/lock", lock::router())
        .with_state(state)
}
