//! Pattern index construction.
//!
//! The index maps each wildcard pattern to the bucket of dictionary words
//! that generate it. Buckets holding a single word cannot witness a neighbor
//! pair and are pruned once the whole dictionary has been registered.

use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use rayon::prelude::*;

use crate::config::IndexConfig;
use crate::dictionary::{Dictionary, validate_word};
use crate::error::{Result, WordlinkError};
use crate::wildcard::pattern::wildcard_patterns;

/// Words sharing one pattern.
pub type Bucket = AHashSet<String>;

/// Mutable pattern map used while building.
pub type BucketMap = AHashMap<String, Bucket>;

/// Register `word` into the bucket of every pattern it generates.
pub fn register_word(buckets: &mut BucketMap, word: &str) {
    for pattern in wildcard_patterns(word) {
        buckets.entry(pattern).or_default().insert(word.to_string());
    }
}

/// Merge two partial maps by set union per pattern.
pub fn merge_buckets(mut left: BucketMap, mut right: BucketMap) -> BucketMap {
    if left.len() < right.len() {
        std::mem::swap(&mut left, &mut right);
    }
    for (pattern, words) in right {
        left.entry(pattern).or_default().extend(words);
    }
    left
}

/// Immutable mapping from wildcard pattern to the words that generate it.
///
/// Every bucket holds at least two distinct words.
#[derive(Debug, Clone, Default)]
pub struct PatternIndex {
    buckets: BucketMap,
}

impl PatternIndex {
    /// Build the index over a whole dictionary.
    pub fn build(dictionary: &Dictionary, config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        let start_time = Instant::now();
        let words = dictionary.words();

        let buckets = if config.use_parallel(words.len()) {
            let shard_size = words.len().div_ceil(config.shard_count).max(1);
            debug!(
                "Building pattern index over {} words in shards of {shard_size}",
                words.len()
            );
            words
                .par_chunks(shard_size)
                .map(|shard| {
                    let mut partial = BucketMap::new();
                    for word in shard {
                        register_word(&mut partial, word);
                    }
                    partial
                })
                .reduce(BucketMap::new, merge_buckets)
        } else {
            let mut buckets = BucketMap::new();
            for word in words {
                register_word(&mut buckets, word);
            }
            buckets
        };

        let index = Self::from_buckets(buckets);
        info!(
            "Built pattern index: {} patterns over {} words in {} ms",
            index.len(),
            words.len(),
            start_time.elapsed().as_millis()
        );
        Ok(index)
    }

    /// Finalize a bucket map, dropping every bucket with fewer than two words.
    pub(crate) fn from_buckets(mut buckets: BucketMap) -> Self {
        let before = buckets.len();
        buckets.retain(|_, words| words.len() >= 2);
        debug!(
            "Pruned {} singleton buckets, {} remain",
            before - buckets.len(),
            buckets.len()
        );
        PatternIndex { buckets }
    }

    /// The bucket for a pattern, if it survived pruning.
    pub fn bucket(&self, pattern: &str) -> Option<&Bucket> {
        self.buckets.get(pattern)
    }

    /// Check if a pattern has a bucket.
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        self.buckets.contains_key(pattern)
    }

    /// Number of surviving patterns.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over patterns in arbitrary order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Iterate over `(pattern, bucket)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets
            .iter()
            .map(|(pattern, words)| (pattern.as_str(), words))
    }

    /// Number of distinct words that appear in at least one bucket.
    pub fn word_count(&self) -> usize {
        self.buckets
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<AHashSet<&str>>()
            .len()
    }
}

impl PartialEq for PatternIndex {
    fn eq(&self, other: &Self) -> bool {
        self.buckets.len() == other.buckets.len()
            && self.buckets.iter().all(|(pattern, words)| {
                other.buckets.get(pattern).is_some_and(|theirs| {
                    words.len() == theirs.len() && words.iter().all(|w| theirs.contains(w))
                })
            })
    }
}

impl Eq for PatternIndex {}

/// Incremental builder for a [`PatternIndex`] from words outside a [`Dictionary`].
#[derive(Debug, Default)]
pub struct PatternIndexBuilder {
    buckets: BucketMap,
    words_added: usize,
}

impl PatternIndexBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one word.
    ///
    /// Words are checked the same way dictionary entries are, so anything
    /// the builder accepts can be written out and read back.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        validate_word(word).map_err(WordlinkError::dictionary_load)?;
        register_word(&mut self.buckets, word);
        self.words_added += 1;
        Ok(())
    }

    /// Register many words, stopping at the first invalid one.
    pub fn add_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref())?;
        }
        Ok(())
    }

    /// Number of words registered so far, duplicates included.
    pub fn words_added(&self) -> usize {
        self.words_added
    }

    /// Prune singleton buckets and freeze the index.
    pub fn build(self) -> PatternIndex {
        PatternIndex::from_buckets(self.buckets)
    }
}
