//! Single page front end

use axum::{extract::State, response::Html};

use crate::page::render_index;
use crate::AppState;

/// GET / - Serve the front end page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.config().network.label()))
}
