//! Configuration for building pattern indexes and neighbor caches.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordlinkError};

/// Configuration for index and cache construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Whether to build the pattern index and neighbor cache on the rayon pool.
    pub parallel_build: bool,

    /// Dictionaries with fewer words than this are always built sequentially.
    pub parallel_threshold: usize,

    /// Number of dictionary shards for the parallel pattern index build.
    pub shard_count: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel_build: true,
            parallel_threshold: 4096,
            shard_count: num_cpus::get(),
        }
    }
}

impl IndexConfig {
    /// Create a configuration that never uses the thread pool.
    pub fn sequential() -> Self {
        Self {
            parallel_build: false,
            ..Self::default()
        }
    }

    /// Enable or disable the parallel build.
    pub fn with_parallel_build(mut self, parallel: bool) -> Self {
        self.parallel_build = parallel;
        self
    }

    /// Set the minimum dictionary size for a parallel build.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the number of shards for the parallel pattern index build.
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Whether a dictionary of `word_count` words should be built in parallel.
    pub fn use_parallel(&self, word_count: usize) -> bool {
        self.parallel_build && word_count >= self.parallel_threshold
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(WordlinkError::invalid_config("shard_count must be at least 1"));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
