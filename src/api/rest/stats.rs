//! Stats endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::corpus::CorpusStats;

/// Corpus statistics plus load status
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub loaded: bool,
    /// RFC 3339 load time, absent before load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
    #[serde(flatten)]
    pub stats: CorpusStats,
}

/// GET /api/stats - Corpus counts
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsResponse>> {
    let corpus = state.store.snapshot();
    let response = StatsResponse {
        loaded: state.store.is_loaded(),
        loaded_at: state.store.loaded_at().map(|t| t.to_rfc3339()),
        stats: corpus.stats(),
    };
    Json(ApiResponse::new(response))
}
