//! Error types for civic-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from a key-value slot.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serialized value does not fit in the slot.
    #[error("Storage quota exceeded for '{key}': {size} bytes > {limit} byte limit")]
    QuotaExceeded { key: String, size: usize, limit: usize },
}

/// Errors from issue store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection could not be written back to its slot.
    ///
    /// The in-memory collection still holds every issue, including the one
    /// whose creation triggered the write.
    #[error("Failed to persist issues to '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: SlotError,
    },

    /// The slot holds a value that could not be loaded and could not be
    /// moved aside, so overwriting it would destroy it.
    #[error("Refusing to overwrite '{key}': its stored value could not be loaded or backed up")]
    Protected { key: String },

    /// The collection could not be serialized.
    #[error("Failed to serialize issues: {0}")]
    Serialize(#[from] serde_json::Error),
}
