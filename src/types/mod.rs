//! Data types for the overview content browser
//!
//! This module contains the core data structures shared by the corpus,
//! search and transport layers.

mod category;
mod entry;
mod summary;

pub use category::{display_name, Category, CategoryListing};
pub use entry::{Entry, EntryBrief, UNCATEGORIZED};
pub use summary::{MatchSummary, SearchResults};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
