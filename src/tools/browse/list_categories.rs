//! List categories tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::corpus::CorpusStore;
use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::types::McpResult;

/// Tool for listing every category in display order
pub struct ListCategoriesTool {
    store: Arc<CorpusStore>,
}

impl ListCategoriesTool {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListCategoriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_categories",
            "List all categories (key and display name) in display order",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        let corpus = self.store.snapshot();
        json_response(&corpus.categories())
    }
}
