//! Open entry tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::corpus::CorpusStore;
use crate::protocol::{McpTool, Tool};
use crate::server::{error_response, json_response, required_str};
use crate::types::McpResult;

/// Tool for reading one full entry: scripture, context, reflection, prayer
pub struct OpenEntryTool {
    store: Arc<CorpusStore>,
}

impl OpenEntryTool {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}

impl Tool for OpenEntryTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "open_entry",
            "Open a full entry by id, including scripture, context, reflection, prayer and additional verses",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Entry id as returned by search_entries or browse_category"
                    }
                },
                "required": ["id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let id = required_str(&params, "id")?;
        let corpus = self.store.snapshot();
        match corpus.entry(id) {
            Some(entry) => json_response(entry),
            None => Ok(error_response(format!("Entry '{}' not found", id))),
        }
    }
}
