//! Lock creation form endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use selflock::{FormMessage, LockForm};

use super::{error_response, ErrorResponse};
use crate::dto::{ApiError, LockFormViewResponse, LockSubmitResponse};
use crate::AppState;

/// Create lock routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit))
        .route("/form", get(get_form).put(update_form))
}

async fn form_view(state: &AppState) -> Json<LockFormViewResponse> {
    let session = state.controller().session().await;
    let form = state.form().await;
    Json(LockFormViewResponse::new(&session, &form))
}

/// GET /lock/form - Current form view
pub async fn get_form(State(state): State<AppState>) -> Json<LockFormViewResponse> {
    form_view(&state).await
}

fn invalid_body(rejection: JsonRejection) -> ErrorResponse {
    tracing::debug!("Rejected lock form body: {}", rejection);
    error_response(400, ApiError::new("invalid_body", rejection.body_text()))
}

/// PUT /lock/form - Replace the draft
pub async fn update_form(
    State(state): State<AppState>,
    body: Result<Json<LockForm>, JsonRejection>,
) -> Result<Json<LockFormViewResponse>, ErrorResponse> {
    let Json(draft) = body.map_err(invalid_body)?;
    state.set_draft(draft).await;
    Ok(form_view(&state).await)
}

/// POST /lock - Validate and submit the draft.
///
/// A JSON body replaces the draft before submission; a request without
/// one submits the stored draft. Unreadable bodies are rejected.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<LockForm>, JsonRejection>,
) -> Result<Json<LockSubmitResponse>, ErrorResponse> {
    let draft = match body {
        Ok(Json(draft)) => Some(draft),
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(invalid_body(rejection)),
    };
    match state.submit_lock_form(draft).await {
        Ok(result) => Ok(Json(LockSubmitResponse {
            message: FormMessage::created(&result),
            result,
        })),
        Err(e) => {
            let body = ApiError::from(&e);
            Err(error_response(e.status_code(), body))
        }
    }
}
