use axum::extract::{Query, State};
use axum::response::Html;

use crate::errors::AppError;
use crate::models::SearchParams;
use crate::state::AppState;

/// GET /search?q=&lang=&sort= - Results fragment only.
///
/// Every parameter is optional and passed through as-is: an empty `q` lists
/// everything, an empty `lang` keeps all languages, an unknown `sort` falls
/// back to most recently starred. Repeated parameters keep their first value.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let params = SearchParams::from_pairs(pairs);
    let results = state.store.search(&params.q, &params.lang, &params.sort);
    let html = state.templates.render_results(&results)?;
    Ok(Html(html))
}
