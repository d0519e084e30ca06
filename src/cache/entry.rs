//! Cache Entry Module
//!
//! Defines the on-disk record for individual cache entries with TTL support.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// == Public Constants ==
/// Sentinel expiration timestamp meaning "never expires"
pub const NO_EXPIRY: i64 = 9_999_999_999;

// == Cache Entry ==
/// A single cache entry as persisted on disk.
///
/// The original key is stored alongside the value for diagnostic purposes;
/// lookup goes through the file path derived from the key, never this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The key the entry was stored under
    pub key: String,
    /// Expiration timestamp (Unix seconds), `NO_EXPIRY` = no expiration
    pub expires_at: i64,
    /// The stored value
    pub value: T,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// # Arguments
    /// * `key` - The key the entry is stored under
    /// * `value` - The value to store
    /// * `ttl_seconds` - Optional TTL in seconds; zero or negative values
    ///   produce an entry that is already expired, `None` means no expiry
    pub fn new(key: &str, value: T, ttl_seconds: Option<i64>) -> Self {
        let expires_at = match ttl_seconds {
            Some(ttl) => current_timestamp_secs() + ttl,
            None => NO_EXPIRY,
        };

        Self {
            key: key.to_string(),
            expires_at,
            value,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a zero TTL is
    /// expired the moment it is written.
    pub fn is_expired(&self) -> bool {
        current_timestamp_secs() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in seconds, or None if no expiration is set.
    ///
    /// Expired entries report a remaining TTL of 0.
    pub fn ttl_remaining(&self) -> Option<i64> {
        if self.expires_at == NO_EXPIRY {
            return None;
        }
        Some((self.expires_at - current_timestamp_secs()).max(0))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp_secs() -> i64 {
    Utc::now().timestamp()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("k", "test_value".to_string(), None);

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.expires_at, NO_EXPIRY);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("k", "test_value".to_string(), Some(60));

        assert!(entry.expires_at >= current_timestamp_secs() + 59);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_expired_immediately() {
        let entry = CacheEntry::new("k", "test_value".to_string(), Some(0));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_negative_ttl_expired_immediately() {
        let entry = CacheEntry::new("k", "test_value".to_string(), Some(-30));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("k", 1u32, Some(10));

        let remaining = entry.ttl_remaining().unwrap();
        assert!(remaining <= 10);
        assert!(remaining >= 9);
    }

    #[test]
    fn test_ttl_remaining_no_expiration() {
        let entry = CacheEntry::new("k", 1u32, None);

        assert!(entry.ttl_remaining().is_none());
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("k", 1u32, Some(-10));

        assert_eq!(entry.ttl_remaining().unwrap(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Expires exactly now: current time >= expires_at must count as expired
        let entry = CacheEntry {
            key: "k".to_string(),
            expires_at: current_timestamp_secs(),
            value: "test".to_string(),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_entry_json_roundtrip() {
        let entry = CacheEntry::new("k", vec![1u32, 2, 3], Some(60));

        let bytes = serde_json::to_vec(&entry).unwrap();
        let decoded: CacheEntry<Vec<u32>> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded.key, entry.key);
        assert_eq!(decoded.expires_at, entry.expires_at);
        assert_eq!(decoded.value, vec![1, 2, 3]);
    }
}
