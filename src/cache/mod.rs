//! Cache Module
//!
//! Provides filesystem-backed caching with lazy TTL expiration.

mod adapter;
mod entry;
mod key;


// Re-export public types
pub use adapter::FileCacheAdapter;
pub use entry::{current_timestamp_secs, CacheEntry, NO_EXPIRY};
pub use key::{validate_key, RESERVED_KEY_CHARS};
