//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::corpus::CorpusStore;

/// State handed to every handler
pub struct AppState {
    /// The session corpus (empty until loaded)
    pub store: Arc<CorpusStore>,
}

impl AppState {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}
