//! Overview - topical scripture content browser
//!
//! Loads a static JSON corpus of topical entries (scripture, context,
//! reflection, prayer) and answers keyword searches with synonym expansion
//! and term-count ranking.
//!
//! # Modules
//!
//! - `types`: Core data structures (Entry, Category, MatchSummary)
//! - `corpus`: Corpus loading (two accepted JSON shapes) and the session store
//! - `search`: Synonym expansion, ranking, and the search/browse rules
//! - `config`: Environment configuration
//! - `error`: Load, config and store errors
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: MCP server over stdio
//! - `tools`: MCP tools exposing search and browsing
//! - `api`: REST API over HTTP
//!
//! # Example
//!
//! ```
//! use overview::corpus::load_corpus;
//! use overview::search::search;
//!
//! let raw = serde_json::json!({
//!     "entries": [{
//!         "id": "joy-1", "title": "Joy in Trials", "category": "emotions",
//!         "tags": ["joy"], "context": "", "reflection": "", "prayer": "",
//!         "scripture": ["James 1:2"], "additional": []
//!     }],
//!     "synonyms": {"joy": ["happy", "glad"]}
//! });
//! let corpus = load_corpus(&raw).unwrap();
//!
//! let results = search(&corpus, "glad");
//! assert_eq!(results.matches[0].id, "joy-1");
//! assert!(results.scrollable);
//! ```

pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Config, ServeMode};
pub use corpus::{load_corpus, Corpus, CorpusStore, FieldPolicy};
pub use error::{ConfigError, LoadFailure, MissingFieldError};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use search::{browse_category, expand, is_scrollable, rank, search, MAX_RESULTS};
pub use server::McpServer;
pub use types::{Category, CategoryListing, Entry, EntryBrief, MatchSummary, McpResult, SearchResults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
