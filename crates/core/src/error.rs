//! Error types for vocabulary learning.

use crate::core::merges::SymbolId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mergewise crates.
#[derive(Error, Debug)]
pub enum VocabError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// A corpus row that did not split into exactly two fields
    #[error("Parse error on line {line}: expected 2 fields, found {fields}")]
    Parse { line: usize, fields: usize },

    /// A definition references an id that is not in the vocabulary
    #[error("Invalid symbol reference: {id}")]
    InvalidReference { id: SymbolId },

    /// Symbol id space exhausted
    #[error("Vocabulary exceeded maximum symbol id {max}")]
    VocabularyOverflow { max: SymbolId },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
