//! Error types for the file cache
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the file cache adapter.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache root directory cannot be created or accessed
    #[error("Cache directory unavailable: {path}: {source}")]
    StorageUnavailable { path: PathBuf, source: io::Error },

    /// Key is empty or contains a reserved character
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Stored entry cannot be deserialized
    #[error("Corrupt entry: {0}")]
    CorruptEntry(#[from] serde_json::Error),

    /// Filesystem error during read/write/delete
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the file cache.
pub type Result<T> = std::result::Result<T, CacheError>;
