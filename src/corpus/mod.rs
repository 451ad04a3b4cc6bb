//! Corpus - immutable in-memory content model
//!
//! A [`Corpus`] is built once by the loader and never mutated. Searchable
//! text is computed up front so every query is a linear scan over
//! pre-lowered strings.

mod loader;
mod store;

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::search::synonyms::{self, SynonymGroups};
use crate::types::{Category, Entry};

pub use loader::{derive_categories, load_corpus, load_corpus_file, load_corpus_str, load_corpus_with, FieldPolicy};
pub use store::CorpusStore;

/// Entries, categories and synonym groups for one session
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
    categories: Vec<Category>,
    synonyms: SynonymGroups,
    /// Lower-cased searchable text, parallel to `entries`
    haystacks: Vec<String>,
    /// entry id -> index of the first entry with that id
    by_id: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from already-normalized parts
    pub fn new(entries: Vec<Entry>, categories: Vec<Category>, synonyms: SynonymGroups) -> Self {
        let haystacks = entries.iter().map(Entry::searchable_text).collect();

        let mut by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_id.entry(entry.id.clone()).or_insert(idx);
        }

        Self {
            entries,
            categories,
            synonyms,
            haystacks,
            by_id,
        }
    }

    /// Corpus with nothing loaded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn synonyms(&self) -> &SynonymGroups {
        &self.synonyms
    }

    /// Searchable text for each entry, in corpus order
    pub(crate) fn haystacks(&self) -> &[String] {
        &self.haystacks
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id (first match wins)
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Entries whose category is `key`, in corpus order
    pub fn entries_in_category<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.category == key)
    }

    /// Resolve a category key to a category.
    ///
    /// Supplied categories win; a key used by some entry but missing from the
    /// category list is derived on the fly.
    pub fn resolve_category(&self, key: &str) -> Option<Category> {
        if let Some(category) = self.categories.iter().find(|c| c.key == key) {
            return Some(category.clone());
        }

        self.entries
            .iter()
            .any(|e| e.category == key)
            .then(|| Category::derived(key))
    }

    /// Expand a query term against this corpus's synonym groups
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        synonyms::expand(&self.synonyms, term)
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            entry_count: self.entries.len(),
            category_count: self.categories.len(),
            synonym_group_count: self.synonyms.len(),
        }
    }
}

/// Corpus statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub entry_count: usize,
    pub category_count: usize,
    pub synonym_group_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        let mut joy = Entry::new("1", "Joy in Trials", "emotions");
        joy.tags = vec!["Happy".to_string()];
        let peace = Entry::new("2", "Peace", "spiritual");
        let dup = Entry::new("1", "Shadowed", "emotions");
        let orphan = Entry::new("3", "Work", "vocation");

        let mut synonyms = SynonymGroups::new();
        synonyms.insert("joy".to_string(), vec!["glad".to_string()]);

        Corpus::new(
            vec![joy, peace, dup, orphan],
            vec![
                Category::new("emotions", "Feelings"),
                Category::new("spiritual", "Spiritual"),
            ],
            synonyms,
        )
    }

    #[test]
    fn test_entry_lookup_first_wins() {
        let corpus = sample();
        assert_eq!(corpus.entry("1").map(|e| e.title.as_str()), Some("Joy in Trials"));
        assert!(corpus.entry("missing").is_none());
    }

    #[test]
    fn test_haystacks_parallel_to_entries() {
        let corpus = sample();
        assert_eq!(corpus.haystacks().len(), corpus.len());
        assert_eq!(corpus.haystacks()[0], "joy in trials happy  ");
    }

    #[test]
    fn test_entries_in_category_preserves_order() {
        let corpus = sample();
        let titles: Vec<&str> = corpus
            .entries_in_category("emotions")
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Joy in Trials", "Shadowed"]);
    }

    #[test]
    fn test_resolve_category() {
        let corpus = sample();
        assert_eq!(corpus.resolve_category("emotions").unwrap().name, "Feelings");
        assert_eq!(corpus.resolve_category("vocation").unwrap().name, "Vocation");
        assert!(corpus.resolve_category("nothing").is_none());
    }

    #[test]
    fn test_expand_uses_corpus_synonyms() {
        let corpus = sample();
        assert!(corpus.expand("gla").contains("joy"));
        assert_eq!(corpus.expand("zzz").len(), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::empty();
        assert!(corpus.is_empty());
        assert_eq!(
            corpus.stats(),
            CorpusStats {
                entry_count: 0,
                category_count: 0,
                synonym_group_count: 0
            }
        );
    }
}
