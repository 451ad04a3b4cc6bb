//! Search entries tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::corpus::CorpusStore;
use crate::protocol::{McpTool, Tool};
use crate::search::{self, MAX_RESULTS};
use crate::server::json_response;
use crate::types::McpResult;

/// Tool for keyword search with synonym expansion
pub struct SearchEntriesTool {
    store: Arc<CorpusStore>,
}

impl SearchEntriesTool {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }
}

impl Tool for SearchEntriesTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_entries",
            format!(
                "Search entries by keyword. Synonyms are expanded and matches ranked by how many \
                 terms appear in the title, tags, context and reflection. Returns at most {} matches.",
                MAX_RESULTS
            ),
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search text; a blank query returns no matches"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
        let corpus = self.store.snapshot();
        let results = search::search(&corpus, query);
        json_response(&results)
    }
}
