//! Write-once session slot for the loaded corpus

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::Corpus;
use crate::error::StoreError;

struct Loaded {
    corpus: Arc<Corpus>,
    loaded_at: DateTime<Utc>,
}

/// Session-wide handle to the corpus.
///
/// Starts empty and accepts exactly one corpus. Readers get an `Arc`
/// snapshot, so no lock is held while scoring. Before a corpus is installed
/// the snapshot is an empty corpus and every search yields nothing.
pub struct CorpusStore {
    slot: RwLock<Option<Loaded>>,
    empty: Arc<Corpus>,
}

impl CorpusStore {
    /// Create a store with nothing loaded
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            empty: Arc::new(Corpus::empty()),
        }
    }

    /// Create a store already holding `corpus`
    pub fn with_corpus(corpus: Corpus) -> Self {
        let store = Self::new();
        *store.slot.write() = Some(Loaded {
            corpus: Arc::new(corpus),
            loaded_at: Utc::now(),
        });
        store
    }

    /// Install the session corpus; fails if one is already installed
    pub fn install(&self, corpus: Corpus) -> Result<(), StoreError> {
        let mut slot = self.slot.write();
        if slot.is_some() {
            return Err(StoreError::AlreadyLoaded);
        }
        *slot = Some(Loaded {
            corpus: Arc::new(corpus),
            loaded_at: Utc::now(),
        });
        Ok(())
    }

    /// Current corpus, or an empty one if nothing is loaded yet
    pub fn snapshot(&self) -> Arc<Corpus> {
        match &*self.slot.read() {
            Some(loaded) => Arc::clone(&loaded.corpus),
            None => Arc::clone(&self.empty),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().is_some()
    }

    /// When the corpus was installed
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().as_ref().map(|loaded| loaded.loaded_at)
    }
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SynonymGroups;
    use crate::types::Entry;

    fn one_entry() -> Corpus {
        Corpus::new(
            vec![Entry::new("1", "Hope", "spiritual")],
            Vec::new(),
            SynonymGroups::new(),
        )
    }

    #[test]
    fn test_empty_until_installed() {
        let store = CorpusStore::new();
        assert!(!store.is_loaded());
        assert!(store.loaded_at().is_none());
        assert!(store.snapshot().is_empty());

        store.install(one_entry()).unwrap();
        assert!(store.is_loaded());
        assert!(store.loaded_at().is_some());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_second_install_rejected() {
        let store = CorpusStore::with_corpus(one_entry());
        assert_eq!(store.install(Corpus::empty()), Err(StoreError::AlreadyLoaded));
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_snapshot_outlives_store_reads() {
        let store = CorpusStore::with_corpus(one_entry());
        let snapshot = store.snapshot();
        drop(store);
        assert_eq!(snapshot.entry("1").unwrap().title, "Hope");
    }
}
