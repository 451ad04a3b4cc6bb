//! REST API module for HTTP endpoints
//!
//! - `GET /api/stats` - Corpus counts and load time
//! - `GET /api/categories` - All categories
//! - `GET /api/categories/:key` - Entries of one category
//! - `GET /api/entries/:id` - Full entry
//! - `GET /api/search?q=` - Ranked search results

pub mod categories;
pub mod entries;
pub mod search;
pub mod stats;

use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }
}
