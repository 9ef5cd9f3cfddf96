use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::errors::AppError;
use crate::models::SortKey;
use crate::state::AppState;

static FAVICON: &[u8] = include_bytes!("../../templates/favicon.ico");

/// GET / - Language picker plus every repo, most recently starred first
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let results = state.store.search("", "", SortKey::Starred.as_str());
    let html = state
        .templates
        .render_index(state.store.languages(), &results)?;
    Ok(Html(html))
}

/// GET /favicon.ico
pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], FAVICON)
}
