//! Configuration Module
//!
//! Handles loading the cache and output file locations from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the persistent result cache.
pub const DEFAULT_CACHE_FILE: &str = "prime_factors_cache.json";

/// Default location of the append-only run log.
pub const DEFAULT_OUTPUT_FILE: &str = "prime_factors_output.txt";

/// Run configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding previously computed factorizations
    pub cache_file: PathBuf,
    /// Text file each run appends its result block to
    pub output_file: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PRIME_CACHE_FILE` - Result cache path (default: prime_factors_cache.json)
    /// - `PRIME_OUTPUT_FILE` - Run log path (default: prime_factors_output.txt)
    pub fn from_env() -> Self {
        Self {
            cache_file: env::var("PRIME_CACHE_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
            output_file: env::var("PRIME_OUTPUT_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
