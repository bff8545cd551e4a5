//! Errors raised while loading cards or assembling the catalog.
//!
//! Generation is all-or-nothing: any of these aborts the run and no
//! partial catalog is emitted.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A uniquely referenced card (e.g. a final boss) is not in the database.
    #[error("required card `{id}` is missing from the card database")]
    MissingCard { id: String },

    /// A family produced a different number of records than asserted for it.
    #[error("{check}: expected {expected} records, assembled {actual}")]
    Cardinality {
        check: String,
        expected: usize,
        actual: usize,
    },

    /// A card lacks a field that record generation needs.
    #[error("card `{id}` has no `{field}`")]
    MalformedCard { id: String, field: &'static str },

    #[error("achievement id `{id}` is generated more than once")]
    DuplicateId { id: String },

    #[error("invalid card id pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn malformed(id: &str, field: &'static str) -> Self {
        CatalogError::MalformedCard {
            id: id.to_string(),
            field,
        }
    }
}
