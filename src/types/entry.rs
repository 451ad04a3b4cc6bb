//! Entry types for the content corpus

use serde::Serialize;

/// Category key assigned to entries that carry no category
pub const UNCATEGORIZED: &str = "uncategorized";

/// One topical content item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub context: String,
    pub reflection: String,
    pub prayer: String,
    pub scripture: Vec<String>,
    pub additional: Vec<String>,
}

impl Entry {
    /// Create an entry with only identity fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            tags: Vec::new(),
            context: String::new(),
            reflection: String::new(),
            prayer: String::new(),
            scripture: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Lower-cased text the scorer matches against.
    ///
    /// Title, space-joined tags, context and reflection, in that order.
    /// Prayer and verses are not searchable.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.tags.join(" "),
            self.context,
            self.reflection
        )
        .to_lowercase()
    }

    /// Short reference used in listings
    pub fn brief(&self) -> EntryBrief {
        EntryBrief {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
        }
    }
}

/// Brief entry info for category listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBrief {
    pub id: String,
    pub title: String,
    pub category: String,
}
