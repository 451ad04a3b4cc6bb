//! Error types for corpus loading and configuration

use thiserror::Error;

/// An entry lacks a field the scorer or detail view relies on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("entry '{entry}' is missing field '{field}'")]
pub struct MissingFieldError {
    /// Entry id, or `#<index>` when the id itself is missing
    pub entry: String,
    pub field: &'static str,
}

/// Reading or decoding the corpus failed; the session continues empty
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported corpus shape: expected an array or an object, found {0}")]
    UnsupportedShape(&'static str),

    #[error("invalid corpus field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),
}

impl LoadFailure {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Invalid environment configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// The corpus store only accepts one corpus per session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("corpus already loaded")]
    AlreadyLoaded,
}
