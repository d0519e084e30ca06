//! File Cache - a filesystem-backed key-value cache
//!
//! Stores each entry as one file under a cache root directory, with
//! per-entry TTL expiration enforced lazily on read.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, FileCacheAdapter};
pub use config::Config;
pub use error::{CacheError, Result};
