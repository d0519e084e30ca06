//! File Cache Adapter Module
//!
//! Main adapter mapping each cache entry to one file under a root directory,
//! combining key validation, JSON persistence, and lazy TTL expiration.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{validate_key, CacheEntry};
use crate::error::{CacheError, Result};

// == File Cache Adapter ==
/// Filesystem-backed cache adapter with lazy TTL expiration.
///
/// Each entry is one file directly under the cache root, named by its
/// validated key. There is no in-process locking: correctness under
/// concurrent writers to the same key depends on the filesystem's
/// truncate-and-write semantics, which are not atomic. A concurrent reader
/// may observe a partially written or briefly missing file; such reads
/// degrade to a cache miss.
#[derive(Debug)]
pub struct FileCacheAdapter {
    /// Root directory holding one file per entry
    cache_dir: PathBuf,
}

impl FileCacheAdapter {
    // == Constructor ==
    /// Creates an adapter rooted at `cache_dir`.
    ///
    /// If the directory does not exist it is created together with its
    /// parents (mode 0o755 on Unix). Failure to create it is fatal: the
    /// adapter never degrades to a non-functional state.
    ///
    /// # Errors
    /// Returns `CacheError::StorageUnavailable` if the directory cannot be
    /// created.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self> {
        let cache_dir = cache_dir.into();

        if !cache_dir.is_dir() {
            create_cache_dir(&cache_dir).map_err(|source| CacheError::StorageUnavailable {
                path: cache_dir.clone(),
                source,
            })?;
        }

        Ok(Self { cache_dir })
    }

    // == Get ==
    /// Retrieves the value stored under `key`, or `default`.
    ///
    /// Reads are fail-soft: a missing entry, an expired entry, a corrupt
    /// file, an invalid key, and any I/O error all yield `default` — a cache
    /// miss is always an acceptable substitute for a cache failure. An
    /// expired entry is deleted as a side effect of the read.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                debug!(key, error = %err, "read failed, returning default");
                default
            }
        }
    }

    // == Try Get ==
    /// Fallible variant of [`get`](Self::get).
    ///
    /// Returns `Ok(None)` for a missing or expired entry, and an error for
    /// an invalid key, a corrupt entry, or an I/O failure. The public
    /// `get`/`has` methods collapse every error into a miss at the API
    /// boundary; this method is for callers that need to tell the cases
    /// apart.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key)?;

        if !path.is_file() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let entry: CacheEntry<T> = serde_json::from_slice(&bytes)?;

        if entry.is_expired() {
            debug!(key, "entry expired, removing");
            self.delete(key);
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    // == Set ==
    /// Stores `value` under `key` with an optional TTL in seconds.
    ///
    /// A zero or negative `ttl` produces an entry that is already expired;
    /// `None` means the entry never expires. Any existing file for the key
    /// is fully replaced.
    ///
    /// # Returns
    /// `true` if the entry was written, `false` on any failure (invalid key,
    /// serialization failure, I/O error). Sets never panic or propagate
    /// errors; a caller that ignores the return value will silently lose
    /// cache entries.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<i64>) -> bool {
        match self.try_set(key, value, ttl) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, error = %err, "set failed");
                false
            }
        }
    }

    fn try_set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<i64>) -> Result<()> {
        let path = self.entry_path(key)?;
        let entry = CacheEntry::new(key, value, ttl);
        let bytes = serde_json::to_vec(&entry)?;
        fs::write(&path, bytes)?;
        Ok(())
    }

    // == Delete ==
    /// Removes the entry stored under `key`.
    ///
    /// Deleting an absent key is a success (idempotent delete).
    ///
    /// # Returns
    /// `true` if the entry is gone afterwards, `false` on an invalid key or
    /// an I/O error.
    pub fn delete(&self, key: &str) -> bool {
        let path = match self.entry_path(key) {
            Ok(path) => path,
            Err(err) => {
                warn!(key, error = %err, "delete failed");
                return false;
            }
        };

        if !path.is_file() {
            return true;
        }

        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, error = %err, "delete failed");
                false
            }
        }
    }

    // == Has ==
    /// Checks whether a live entry exists under `key`.
    ///
    /// Structurally identical to [`get`](Self::get) with a boolean result:
    /// `false` for a missing, expired (deleted as a side effect), or
    /// unreadable entry.
    pub fn has(&self, key: &str) -> bool {
        match self.try_get::<serde_json::Value>(key) {
            Ok(Some(_)) => true,
            Ok(None) => false,
            Err(err) => {
                debug!(key, error = %err, "existence check failed");
                false
            }
        }
    }

    // == Clear ==
    /// Removes every entry directly under the cache root.
    ///
    /// The sweep is non-recursive: files are unlinked, subdirectories are
    /// removed only if already empty. On the first failed removal the sweep
    /// aborts and reports failure; entries removed before that stay removed.
    pub fn clear(&self) -> bool {
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "clear failed to read cache directory");
                return false;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    warn!(error = %err, "clear failed to enumerate entry");
                    return false;
                }
            };

            let removed = if path.is_dir() {
                fs::remove_dir(&path)
            } else {
                fs::remove_file(&path)
            };

            if let Err(err) = removed {
                warn!(path = %path.display(), error = %err, "clear aborted");
                return false;
            }
        }

        true
    }

    // == Get Multiple ==
    /// Lazily retrieves the values for `keys`, in input order.
    ///
    /// Each step performs one [`get`](Self::get); a missing or expired key
    /// yields `default` at its position and the sequence never aborts. Keys
    /// not yet consumed are not read.
    pub fn get_multiple<'a, T, I>(
        &'a self,
        keys: I,
        default: T,
    ) -> impl Iterator<Item = (String, T)> + 'a
    where
        T: DeserializeOwned + Clone + 'a,
        I: IntoIterator,
        I::Item: Into<String>,
        I::IntoIter: 'a,
    {
        keys.into_iter().map(move |key| {
            let key = key.into();
            let value = self.get(&key, default.clone());
            (key, value)
        })
    }

    // == Set Multiple ==
    /// Stores every `(key, value)` pair with the same optional TTL.
    ///
    /// Pairs are written in input order. The first failed [`set`](Self::set)
    /// stops the batch and the method reports failure; pairs already written
    /// stay written (short-circuit, not transactional).
    pub fn set_multiple<T, K, I>(&self, entries: I, ttl: Option<i64>) -> bool
    where
        T: Serialize,
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        for (key, value) in entries {
            if !self.set(key.as_ref(), &value, ttl) {
                return false;
            }
        }
        true
    }

    // == Delete Multiple ==
    /// Deletes every key in input order.
    ///
    /// Stops at the first failed [`delete`](Self::delete) and reports
    /// failure; prior deletions are retained.
    pub fn delete_multiple<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            if !self.delete(key.as_ref()) {
                return false;
            }
        }
        true
    }

    // == Entry Path ==
    /// Derives the file path for a key, validating the key first.
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.cache_dir.join(key))
    }
}

// == Directory Bootstrap ==
#[cfg(unix)]
fn create_cache_dir(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_cache_dir(path: &std::path::Path) -> std::io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(path)
}
