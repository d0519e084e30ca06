//! Key Validation Module
//!
//! Keys map directly onto file names inside a flat cache directory, so path
//! separators and shell/URI-special characters are rejected before any file
//! path is derived from a key.

use crate::error::{CacheError, Result};

// == Public Constants ==
/// Characters that may not appear in a cache key
pub const RESERVED_KEY_CHARS: [char; 8] = ['{', '}', '(', ')', '/', '\\', '@', ':'];

// == Validate Key ==
/// Validates a cache key.
///
/// A key must be a non-empty string containing none of the reserved
/// characters `{ } ( ) / \ @ :`.
///
/// # Arguments
/// * `key` - The key to validate
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey(
            "key must be a non-empty string".to_string(),
        ));
    }

    if let Some(reserved) = key.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
        return Err(CacheError::InvalidKey(format!(
            "key {:?} contains reserved character {:?}",
            key, reserved
        )));
    }

    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for key in ["abc-123", "user_1", "a", "UPPER.lower", "0"] {
            assert!(validate_key(key).is_ok(), "key {:?} should be valid", key);
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(validate_key(""), Err(CacheError::InvalidKey(_))));
    }

    #[test]
    fn test_reserved_characters_rejected() {
        for key in [
            "a{b", "a}b", "a(b", "a)b", "a/b", "a\\b", "a@b", "a:b",
        ] {
            assert!(
                matches!(validate_key(key), Err(CacheError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_path_traversal_blocked() {
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("..\\escape").is_err());
    }

    #[test]
    fn test_unicode_key_accepted() {
        assert!(validate_key("clé-café").is_ok());
    }
}
