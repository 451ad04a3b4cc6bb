//! Corpus loading from the raw JSON payload
//!
//! Two payload shapes are accepted:
//! - a bare array, treated as the entry list
//! - an object with optional `entries`, `categories` and `synonyms` keys
//!
//! Anything else is a [`LoadFailure`].

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};

use super::Corpus;
use crate::error::{LoadFailure, MissingFieldError};
use crate::search::synonyms::SynonymGroups;
use crate::types::{display_name, Category, Entry, UNCATEGORIZED};

/// What to do when an entry lacks an expected field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Fail the load with a [`MissingFieldError`]
    Strict,
    /// Substitute an empty value and log a warning
    #[default]
    Lenient,
}

/// Top-level payload shape
enum CorpusShape<'a> {
    Entries(&'a [Value]),
    Document(&'a Map<String, Value>),
}

impl<'a> CorpusShape<'a> {
    fn of(raw: &'a Value) -> Result<Self, LoadFailure> {
        match raw {
            Value::Array(items) => Ok(Self::Entries(items)),
            Value::Object(map) => Ok(Self::Document(map)),
            other => Err(LoadFailure::UnsupportedShape(kind(other))),
        }
    }
}

/// Load a corpus with the default (lenient) field policy
pub fn load_corpus(raw: &Value) -> Result<Corpus, LoadFailure> {
    load_corpus_with(raw, FieldPolicy::default())
}

/// Load a corpus from a parsed JSON value
pub fn load_corpus_with(raw: &Value, policy: FieldPolicy) -> Result<Corpus, LoadFailure> {
    let corpus = match CorpusShape::of(raw)? {
        CorpusShape::Entries(items) => {
            let entries = decode_entries(items, policy)?;
            let categories = derive_categories(&entries);
            Corpus::new(entries, categories, SynonymGroups::new())
        }
        CorpusShape::Document(map) => {
            let entries = match map.get("entries") {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(items)) => decode_entries(items, policy)?,
                Some(other) => {
                    return Err(LoadFailure::invalid(
                        "entries",
                        format!("expected an array, found {}", kind(other)),
                    ))
                }
            };

            let synonyms = decode_synonyms(map.get("synonyms"))?;

            // Supplied categories are used verbatim only when non-empty
            let categories = match map.get("categories") {
                Some(Value::Array(items)) if !items.is_empty() => decode_categories(items)?,
                _ => derive_categories(&entries),
            };

            Corpus::new(entries, categories, synonyms)
        }
    };

    let stats = corpus.stats();
    tracing::info!(
        entries = stats.entry_count,
        categories = stats.category_count,
        synonym_groups = stats.synonym_group_count,
        "Corpus loaded"
    );

    Ok(corpus)
}

/// Parse and load a corpus from JSON text
pub fn load_corpus_str(text: &str, policy: FieldPolicy) -> Result<Corpus, LoadFailure> {
    let raw: Value = serde_json::from_str(text)?;
    load_corpus_with(&raw, policy)
}

/// Read, parse and load a corpus file
pub async fn load_corpus_file(
    path: impl AsRef<Path>,
    policy: FieldPolicy,
) -> Result<Corpus, LoadFailure> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading corpus");
    let text = tokio::fs::read_to_string(path).await?;
    load_corpus_str(&text, policy)
}

/// One category per distinct entry category key, in first-seen order
pub fn derive_categories(entries: &[Entry]) -> Vec<Category> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| Category::derived(e.category.as_str()))
        .collect()
}

fn decode_entries(items: &[Value], policy: FieldPolicy) -> Result<Vec<Entry>, LoadFailure> {
    let mut entries = Vec::with_capacity(items.len());
    let mut ids = HashSet::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let entry = decode_entry(idx, item, policy)?;

        if !ids.insert(entry.id.clone()) {
            match policy {
                FieldPolicy::Strict => return Err(LoadFailure::DuplicateId(entry.id)),
                FieldPolicy::Lenient => {
                    tracing::warn!(entry = %entry.id, "Duplicate entry id; lookups return the first")
                }
            }
        }

        entries.push(entry);
    }

    Ok(entries)
}

fn decode_entry(idx: usize, item: &Value, policy: FieldPolicy) -> Result<Entry, LoadFailure> {
    let obj = item.as_object().ok_or_else(|| {
        LoadFailure::invalid(
            format!("entries[{}]", idx),
            format!("expected an object, found {}", kind(item)),
        )
    })?;

    let id = match obj.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(MissingFieldError {
                entry: format!("#{}", idx),
                field: "id",
            }
            .into())
        }
    };

    let fields = EntryFields {
        obj,
        id: &id,
        policy,
    };

    let category = match obj.get("category") {
        Some(Value::String(key)) if !key.is_empty() => key.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => UNCATEGORIZED.to_string(),
        Some(other) => return Err(fields.wrong_type("category", "a string", other)),
    };

    Ok(Entry {
        title: fields.text("title")?,
        tags: fields.list("tags")?,
        context: fields.text("context")?,
        reflection: fields.text("reflection")?,
        prayer: fields.text("prayer")?,
        scripture: fields.list("scripture")?,
        additional: fields.list("additional")?,
        category,
        id,
    })
}

/// Field accessor applying the missing-field policy
struct EntryFields<'a> {
    obj: &'a Map<String, Value>,
    id: &'a str,
    policy: FieldPolicy,
}

impl EntryFields<'_> {
    fn missing(&self, field: &'static str) -> Result<(), LoadFailure> {
        match self.policy {
            FieldPolicy::Strict => Err(MissingFieldError {
                entry: self.id.to_string(),
                field,
            }
            .into()),
            FieldPolicy::Lenient => {
                tracing::warn!(entry = %self.id, field, "Entry is missing a field; using an empty value");
                Ok(())
            }
        }
    }

    fn text(&self, field: &'static str) -> Result<String, LoadFailure> {
        match self.obj.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            None | Some(Value::Null) => self.missing(field).map(|_| String::new()),
            Some(other) => Err(self.wrong_type(field, "a string", other)),
        }
    }

    fn list(&self, field: &'static str) -> Result<Vec<String>, LoadFailure> {
        match self.obj.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(self.wrong_type(field, "an array of strings", other)),
                })
                .collect(),
            None | Some(Value::Null) => self.missing(field).map(|_| Vec::new()),
            Some(other) => Err(self.wrong_type(field, "an array of strings", other)),
        }
    }

    fn wrong_type(&self, field: &str, expected: &str, found: &Value) -> LoadFailure {
        LoadFailure::invalid(
            format!("{}.{}", self.id, field),
            format!("expected {}, found {}", expected, kind(found)),
        )
    }
}

fn decode_synonyms(raw: Option<&Value>) -> Result<SynonymGroups, LoadFailure> {
    let map = match raw {
        None | Some(Value::Null) => return Ok(SynonymGroups::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(LoadFailure::invalid(
                "synonyms",
                format!("expected an object, found {}", kind(other)),
            ))
        }
    };

    let mut groups = SynonymGroups::new();
    for (key, members) in map {
        let members: Vec<String> = serde_json::from_value(members.clone()).map_err(|_| {
            LoadFailure::invalid(format!("synonyms.{}", key), "expected an array of strings")
        })?;
        groups.insert(key.clone(), members);
    }

    Ok(groups)
}

fn decode_categories(items: &[Value]) -> Result<Vec<Category>, LoadFailure> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let key = item.get("key").and_then(Value::as_str).ok_or_else(|| {
                LoadFailure::invalid(format!("categories[{}].key", idx), "expected a string")
            })?;
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| display_name(key));
            Ok(Category::new(key, name))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry(id: &str, title: &str, category: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "category": category,
            "tags": ["hope"],
            "context": "context",
            "reflection": "reflection",
            "prayer": "prayer",
            "scripture": ["Romans 15:13"],
            "additional": ["Psalm 42:5"]
        })
    }

    #[test]
    fn test_array_shape_derives_categories_in_first_seen_order() {
        let raw = json!([
            {"id": 1, "title": "x"},
            {"id": 2, "title": "y", "category": "joy"}
        ]);
        let corpus = load_corpus(&raw).unwrap();

        assert_eq!(
            corpus.categories(),
            &[
                Category::new("uncategorized", "Uncategorized"),
                Category::new("joy", "Joy"),
            ]
        );
        assert!(corpus.synonyms().is_empty());
        assert_eq!(corpus.entries()[0].id, "1");
        assert_eq!(corpus.entries()[0].category, UNCATEGORIZED);
    }

    #[test]
    fn test_derivation_one_category_per_key() {
        let raw = json!([
            full_entry("a", "A", "emotions"),
            full_entry("b", "B", "spiritual"),
            full_entry("c", "C", "emotions"),
            full_entry("d", "D", ""),
        ]);
        let corpus = load_corpus(&raw).unwrap();
        let keys: Vec<&str> = corpus.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["emotions", "spiritual", "uncategorized"]);
    }

    #[test]
    fn test_object_shape_uses_supplied_categories() {
        let raw = json!({
            "entries": [full_entry("a", "A", "emotions")],
            "categories": [
                {"key": "spiritual", "name": "Spiritual Life"},
                {"key": "emotions"}
            ],
            "synonyms": {"joy": ["happy", "glad"]}
        });
        let corpus = load_corpus_with(&raw, FieldPolicy::Strict).unwrap();

        assert_eq!(
            corpus.categories(),
            &[
                Category::new("spiritual", "Spiritual Life"),
                Category::new("emotions", "Emotions"),
            ]
        );
        assert_eq!(corpus.synonyms()["joy"], vec!["happy", "glad"]);
    }

    #[test]
    fn test_object_shape_empty_categories_are_derived() {
        let raw = json!({
            "entries": [full_entry("a", "A", "relationships")],
            "categories": []
        });
        let corpus = load_corpus(&raw).unwrap();
        assert_eq!(corpus.categories(), &[Category::new("relationships", "Relationships")]);
    }

    #[test]
    fn test_object_shape_defaults() {
        let corpus = load_corpus(&json!({})).unwrap();
        assert!(corpus.is_empty());
        assert!(corpus.categories().is_empty());
        assert!(corpus.synonyms().is_empty());

        let corpus = load_corpus(&json!({"entries": null, "synonyms": null})).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_unsupported_shapes() {
        for raw in [json!("text"), json!(42), json!(true), Value::Null] {
            assert!(matches!(
                load_corpus(&raw),
                Err(LoadFailure::UnsupportedShape(_))
            ));
        }
    }

    #[test]
    fn test_invalid_nested_fields() {
        let err = load_corpus(&json!({"entries": "nope"})).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidField { ref field, .. } if field == "entries"));

        let err = load_corpus(&json!({"synonyms": {"joy": "happy"}})).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidField { ref field, .. } if field == "synonyms.joy"));

        let err = load_corpus(&json!([42])).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidField { ref field, .. } if field == "entries[0]"));

        let err = load_corpus(&json!({"categories": [{"name": "No key"}]})).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidField { .. }));
    }

    #[test]
    fn test_strict_policy_rejects_missing_fields() {
        let raw = json!([{"id": "joy-1", "title": "Joy", "category": "emotions"}]);
        let err = load_corpus_with(&raw, FieldPolicy::Strict).unwrap_err();
        match err {
            LoadFailure::MissingField(missing) => {
                assert_eq!(missing.entry, "joy-1");
                assert_eq!(missing.field, "tags");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_policy_substitutes_empty_values() {
        let raw = json!([{"id": "joy-1", "category": "emotions", "context": null}]);
        let corpus = load_corpus_with(&raw, FieldPolicy::Lenient).unwrap();
        let entry = corpus.entry("joy-1").unwrap();
        assert_eq!(entry.title, "");
        assert!(entry.tags.is_empty());
        assert_eq!(entry.context, "");
        assert!(entry.additional.is_empty());
    }

    #[test]
    fn test_missing_id_fails_under_both_policies() {
        let raw = json!([full_entry("a", "A", "x"), {"title": "No id"}]);
        for policy in [FieldPolicy::Strict, FieldPolicy::Lenient] {
            let err = load_corpus_with(&raw, policy).unwrap_err();
            assert!(matches!(
                err,
                LoadFailure::MissingField(MissingFieldError { ref entry, field: "id" }) if entry == "#1"
            ));
        }
    }

    #[test]
    fn test_wrong_field_type_is_invalid() {
        let mut entry = full_entry("a", "A", "x");
        entry["tags"] = json!(["ok", 3]);
        let err = load_corpus(&json!([entry])).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidField { ref field, .. } if field == "a.tags"));
    }

    #[test]
    fn test_non_string_category_is_invalid() {
        for policy in [FieldPolicy::Strict, FieldPolicy::Lenient] {
            let mut entry = full_entry("a", "A", "x");
            entry["category"] = json!(5);
            let err = load_corpus_with(&json!([entry]), policy).unwrap_err();
            assert!(matches!(err, LoadFailure::InvalidField { ref field, .. } if field == "a.category"));
        }

        let mut entry = full_entry("b", "B", "x");
        entry["category"] = Value::Null;
        let corpus = load_corpus_with(&json!([entry]), FieldPolicy::Strict).unwrap();
        assert_eq!(corpus.entry("b").unwrap().category, UNCATEGORIZED);
    }

    #[test]
    fn test_duplicate_ids() {
        let raw = json!([full_entry("a", "First", "x"), full_entry("a", "Second", "x")]);

        assert!(matches!(
            load_corpus_with(&raw, FieldPolicy::Strict),
            Err(LoadFailure::DuplicateId(ref id)) if id == "a"
        ));

        let corpus = load_corpus_with(&raw, FieldPolicy::Lenient).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entry("a").unwrap().title, "First");
    }

    #[test]
    fn test_load_corpus_str_parse_failure() {
        let err = load_corpus_str("{ broken", FieldPolicy::Lenient).unwrap_err();
        assert!(matches!(err, LoadFailure::Parse(_)));
    }
}
