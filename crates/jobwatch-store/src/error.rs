//! Error types for the seen-posting store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur reading or writing the state file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State file exists but is not a JSON array of strings.
    #[error("corrupt state file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Seen set could not be encoded.
    #[error("failed to encode seen set: {0}")]
    Encode(#[from] serde_json::Error),
}
