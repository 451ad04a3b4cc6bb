//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::search;
use crate::types::SearchResults;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text; missing or blank means no search
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - Search entries with synonym expansion
///
/// Fires on every keystroke, so a blank query is not an error: it returns
/// empty results.
pub async fn search_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchResults>> {
    let corpus = state.store.snapshot();
    let results = search::search(&corpus, &params.q);
    let total = results.matches.len();
    Json(ApiResponse::with_total(results, total))
}
