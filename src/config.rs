//! Configuration Module
//!
//! Handles loading the cache root directory from environment variables.

use std::env;
use std::path::PathBuf;

/// Cache configuration parameters.
///
/// The adapter itself only needs a directory path; this struct exists so
/// applications can resolve that path from the environment with a sensible
/// default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which cache entries are stored
    pub cache_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DIR` - Cache root directory (default: "cache")
    pub fn from_env() -> Self {
        Self {
            cache_dir: env::var("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cache")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
        }
    }
}
