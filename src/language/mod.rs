//! Character-frequency language identification
//!
//! Scores a text against per-language reference frequency tables and either
//! reports a similarity score per language, picks the best match, or checks
//! whether a text is "typical" of one language above a threshold.
//!
//! Reference tables come from a [`FrequencyStore`], an injectable collaborator
//! so tests and embedders can supply in-memory tables instead of a directory
//! on disk.

mod classify;
mod store;

pub use classify::{FrequencyComparator, LanguageClassifier, DEFAULT_TYPICALITY_THRESHOLD};
pub use store::{DirStore, FrequencyStore, FrequencyTable, MemoryStore};

use thiserror::Error;

/// Errors from the language pipeline
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("language '{0}' is not available")]
    NotFound(String),

    #[error("frequency table for '{language}' is malformed: {source}")]
    MalformedTable {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read frequency table for '{language}'")]
    Io {
        language: String,
        #[source]
        source: std::io::Error,
    },
}

pub type LanguageResult<T> = Result<T, LanguageError>;
