//! Store error types.

use thiserror::Error;

/// Errors from the in-memory store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Unique constraint violated.
    #[error("duplicate {field}: {value}")]
    Duplicate { field: String, value: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Shorthand for a duplicate-field error.
    pub fn duplicate(field: &str, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.to_string(),
            value: value.into(),
        }
    }
}
