//! Browse category tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::corpus::CorpusStore;
use crate::protocol::{McpTool, Tool};
use crate::search;
use crate::server::{error_response, json_response, required_str};
use crate::types::McpResult;

/// Tool for listing the entries of one category
pub struct BrowseCategoryTool {
    store: Arc<CorpusStore>,
}

impl BrowseCategoryTool {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}

impl Tool for BrowseCategoryTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "browse_category",
            "List the entries of a category in corpus order, with a flag telling whether \
             the listing belongs in a scrolling container",
            json!({
                "type": "object",
                "properties": {
                    "key": {
                        "type": "string",
                        "description": "Category key, e.g. 'emotions'"
                    }
                },
                "required": ["key"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let key = required_str(&params, "key")?;
        let corpus = self.store.snapshot();
        match search::browse_category(&corpus, key) {
            Some(listing) => json_response(&listing),
            None => Ok(error_response(format!("Category '{}' not found", key))),
        }
    }
}
