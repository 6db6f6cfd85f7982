//! Health check and info panel endpoints

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, InfoResponse};
use crate::AppState;

/// GET /health - Check API health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// GET /info - Network and token shown in the info panel
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::new(
        state.config(),
        state.controller().backend_name(),
    ))
}
