//! Error types for the catalog store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing a catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A catalog file does not exist.
    #[error("catalog file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Reading or writing a catalog file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog file holds malformed JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No entry with this name exists.
    #[error("not found: {0}")]
    NotFound(String),

    /// An entry with this name already exists.
    #[error("name already taken: {0}")]
    DuplicateName(String),
}
