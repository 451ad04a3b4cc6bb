//! Per-query search result types

use serde::Serialize;

/// Scored reference to an entry, recomputed for every query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub id: String,
    pub title: String,
    /// Number of expanded terms found in the entry's searchable text
    pub score: usize,
}

/// Outcome of one search query after truncation
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchResults {
    /// Normalized query (trimmed, lower-cased)
    pub query: String,
    /// Expanded terms in sorted order, kept when nothing matched; empty when the query was blank
    pub terms: Vec<String>,
    pub matches: Vec<MatchSummary>,
    pub scrollable: bool,
}

impl SearchResults {
    /// Results for a query that produced nothing to show
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
