//! Connection widget endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::{error_response, ErrorResponse};
use crate::dto::{ApiError, WalletViewResponse};
use crate::AppState;

/// Create wallet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_wallet))
        .route("/connect", post(connect))
        .route("/disconnect", post(disconnect))
        .route("/refresh", post(refresh))
}

async fn view(state: &AppState) -> Json<WalletViewResponse> {
    Json(WalletViewResponse::from(&state.controller().session().await))
}

/// GET /wallet - Current connection widget view
pub async fn get_wallet(State(state): State<AppState>) -> Json<WalletViewResponse> {
    view(&state).await
}

/// POST /wallet/connect - Attach a wallet account
pub async fn connect(
    State(state): State<AppState>,
) -> Result<Json<WalletViewResponse>, ErrorResponse> {
    state
        .controller()
        .connect()
        .await
        .map_err(|e| error_response(e.status_code(), ApiError::from(&e)))?;
    Ok(view(&state).await)
}

/// POST /wallet/disconnect - Detach the wallet
pub async fn disconnect(State(state): State<AppState>) -> Json<WalletViewResponse> {
    state.controller().disconnect().await;
    view(&state).await
}

/// POST /wallet/refresh - Re-read the balance
pub async fn refresh(
    State(state): State<AppState>,
) -> Result<Json<WalletViewResponse>, ErrorResponse> {
    state
        .controller()
        .refresh_balance()
        .await
        .map_err(|e| error_response(e.status_code(), ApiError::from(&e)))?;
    Ok(view(&state).await)
}
