//! HTTP layer: the full page, the search fragment and the favicon.

pub mod pages;
pub mod search;

use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router around an already-loaded state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(pages::index))
        .route("/search", get(search::search))
        .route("/favicon.ico", get(pages::favicon))
        // Anything else gets the full page
        .fallback(pages::index)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
