//! Search with synonym expansion and term-count ranking
//!
//! This module provides:
//! - Synonym expansion of the query term
//! - Term-count scoring over the corpus
//! - The orchestration rules applied around both: empty-query guard,
//!   truncation to [`MAX_RESULTS`], and the scrollable presentation flag

pub mod ranker;
pub mod synonyms;

use std::collections::BTreeSet;

use crate::corpus::Corpus;
use crate::types::{CategoryListing, Entry, SearchResults};

pub use ranker::{rank, score};
pub use synonyms::{expand, SynonymGroups};

/// Number of matches shown for a query
pub const MAX_RESULTS: usize = 6;

/// Categories whose listings are shown in a height-constrained container
pub const SCROLLABLE_CATEGORIES: &[&str] = &["emotions", "spiritual", "relationships"];

/// Check if a category key is a scrollable category
pub fn is_scrollable_category(key: &str) -> bool {
    SCROLLABLE_CATEGORIES.contains(&key)
}

/// Whether results should be rendered in a scrolling container.
///
/// True when any expanded term names a scrollable category, or when there
/// is at least one matched entry and all of them sit in scrollable categories.
pub fn is_scrollable<'a>(
    terms: &BTreeSet<String>,
    matched: impl IntoIterator<Item = &'a Entry>,
) -> bool {
    if terms.iter().any(|t| is_scrollable_category(t)) {
        return true;
    }

    let mut matched = matched.into_iter().peekable();
    matched.peek().is_some() && matched.all(|e| is_scrollable_category(&e.category))
}

/// Run one query against the corpus.
///
/// The query is trimmed and lower-cased; a blank query returns empty results
/// without reaching the scorer (an empty term would match every entry).
pub fn search(corpus: &Corpus, query: &str) -> SearchResults {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return SearchResults::empty(term);
    }

    let terms = corpus.expand(&term);
    let mut matches = rank(corpus, &terms);
    matches.truncate(MAX_RESULTS);

    // Drop summaries whose id no longer resolves
    let (matches, entries): (Vec<_>, Vec<_>) = matches
        .into_iter()
        .filter_map(|m| corpus.entry(&m.id).map(|e| (m, e)))
        .unzip();

    if matches.is_empty() {
        tracing::debug!(query = %term, terms = terms.len(), "No matches");
        return SearchResults {
            terms: terms.into_iter().collect(),
            ..SearchResults::empty(term)
        };
    }

    let scrollable = is_scrollable(&terms, entries);
    tracing::debug!(query = %term, terms = terms.len(), matches = matches.len(), scrollable, "Search completed");

    SearchResults {
        query: term,
        terms: terms.into_iter().collect(),
        matches,
        scrollable,
    }
}

/// List the entries of one category, in corpus order.
///
/// Returns `None` for a key that names no category.
pub fn browse_category(corpus: &Corpus, key: &str) -> Option<CategoryListing> {
    let category = corpus.resolve_category(key)?;
    let entries = corpus.entries_in_category(key).map(Entry::brief).collect();

    Some(CategoryListing {
        category,
        entries,
        scrollable: is_scrollable_category(key),
    })
}
