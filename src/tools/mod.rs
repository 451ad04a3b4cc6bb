//! MCP Tools implementation
//!
//! Four tools over the shared corpus store:
//! - Search tools (1): keyword search with synonym expansion
//! - Browse tools (3): categories, category listings, full entries

pub mod browse;
pub mod search;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::corpus::CorpusStore;
use crate::server::McpServer;

pub use browse::{BrowseCategoryTool, ListCategoriesTool, OpenEntryTool};
pub use search::SearchEntriesTool;

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(server: &mut McpServer<R, W>, store: Arc<CorpusStore>) {
    server.register_tool(Box::new(SearchEntriesTool::new(store.clone())));
    server.register_tool(Box::new(ListCategoriesTool::new(store.clone())));
    server.register_tool(Box::new(BrowseCategoryTool::new(store.clone())));
    server.register_tool(Box::new(OpenEntryTool::new(store)));
}
