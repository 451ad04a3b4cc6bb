//! Entry endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// GET /api/entries/:id - Full entry for the detail view
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // Path already percent-decodes the segment
    let corpus = state.store.snapshot();

    match corpus.entry(&id) {
        Some(entry) => (StatusCode::OK, Json(ApiResponse::new(entry.clone()))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Entry '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
