//! Search tools

mod search_entries;

pub use search_entries::SearchEntriesTool;
