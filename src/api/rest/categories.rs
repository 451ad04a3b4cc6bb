//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::search;

/// GET /api/categories - All categories in display order
pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let corpus = state.store.snapshot();
    let categories = corpus.categories().to_vec();
    let total = categories.len();
    Json(ApiResponse::with_total(categories, total))
}

/// GET /api/categories/:key - Entries of one category
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let corpus = state.store.snapshot();

    match search::browse_category(&corpus, &key) {
        Some(listing) => {
            let total = listing.entries.len();
            (StatusCode::OK, Json(ApiResponse::with_total(listing, total))).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("Category '{}' not found", key));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
