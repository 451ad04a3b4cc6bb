//! Category types

use serde::Serialize;

use super::EntryBrief;

/// A named grouping of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: String,
    pub name: String,
}

impl Category {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Build a category whose display name is derived from its key
    pub fn derived(key: impl Into<String>) -> Self {
        let key = key.into();
        let name = display_name(&key);
        Self { key, name }
    }
}

/// Key with its first character upper-cased ("joy" -> "Joy")
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Entries of one category, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub entries: Vec<EntryBrief>,
    /// Render in a height-constrained scrolling container
    pub scrollable: bool,
}
