//! Error types for the pathdoc library.
//!
//! Analysis itself never fails: filesystem problems are folded into
//! "does not exist". The variants here cover configuration, output, and
//! the mutating steps of a fix session.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathdoc error.
///
/// # Examples
///
/// ```
/// use pathdoc::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathdoc library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No entry with the given index exists in the current snapshot.
    #[error("entry #{index:02} not found")]
    EntryNotFound {
        /// The 1-based index that was requested.
        index: usize,
    },

    /// The selected entry resolves to an existing directory.
    #[error("entry #{index:02} is not broken")]
    EntryNotBroken {
        /// The 1-based index of the entry.
        index: usize,
    },

    /// The entry no longer matches the segment at its position.
    #[error("entry #{index:02} is stale: expected '{expected}' at that position")]
    StaleEntry {
        /// The 1-based index the entry claimed.
        index: usize,
        /// The raw text the entry was built from.
        expected: String,
    },

    /// A directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A replacement target is not an existing directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The rejected path.
        path: PathBuf,
    },
}
