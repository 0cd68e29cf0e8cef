//! Cache-backed word graph over a single dictionary.

use std::path::Path;

use ahash::AHashSet;
use log::info;

use crate::config::IndexConfig;
use crate::dictionary::{Dictionary, WordIndex};
use crate::error::{Result, WordlinkError};
use crate::ladder::shortest_ladders;
use crate::oracle::NeighborOracle;
use crate::wildcard::codec::{load_index, save_index};
use crate::wildcard::pattern::pattern_order;
use crate::wildcard::{NeighborCache, PatternIndex};

/// A dictionary together with its pattern index and neighbor cache.
#[derive(Debug, Clone)]
pub struct WordGraph {
    dictionary: Dictionary,
    index: PatternIndex,
    cache: NeighborCache,
}

impl WordGraph {
    /// Build the pattern index and the cache for `dictionary`.
    pub fn from_dictionary(dictionary: Dictionary, config: &IndexConfig) -> Result<Self> {
        let index = PatternIndex::build(&dictionary, config)?;
        Ok(Self::with_index(dictionary, index, config))
    }

    /// Use an existing pattern index and build only the cache.
    pub fn with_index(dictionary: Dictionary, index: PatternIndex, config: &IndexConfig) -> Self {
        let cache = NeighborCache::build(&dictionary, &index, config);
        WordGraph {
            dictionary,
            index,
            cache,
        }
    }

    /// Load a dictionary file and build everything from it.
    pub fn open<P: AsRef<Path>>(dictionary_path: P, config: &IndexConfig) -> Result<Self> {
        let dictionary = Dictionary::load(dictionary_path)?;
        Self::from_dictionary(dictionary, config)
    }

    /// Load a dictionary file and a previously saved pattern index.
    ///
    /// The index must have been built from the same word set: an index word
    /// missing from the dictionary, or a dictionary word the index never
    /// registered, is an error.
    pub fn open_with_index<P, Q>(dictionary_path: P, index_path: Q, config: &IndexConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let dictionary = Dictionary::load(dictionary_path)?;
        let index = load_index(index_path)?;
        check_index_matches(&dictionary, &index)?;

        let graph = Self::with_index(dictionary, index, config);
        info!("Opened word graph with {} words", graph.dictionary.len());
        Ok(graph)
    }

    /// Persist the pattern index in the canonical text format.
    pub fn save_index<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_index(&self.index, path)
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The underlying pattern index.
    pub fn index(&self) -> &PatternIndex {
        &self.index
    }

    /// The underlying neighbor cache.
    pub fn cache(&self) -> &NeighborCache {
        &self.cache
    }

    /// Neighbors of any word, ordered by length then lexicographically.
    ///
    /// Dictionary words are answered from the cache, other words from the
    /// pattern index.
    pub fn find_neighbors(&self, word: &str) -> Vec<&str> {
        let mut neighbors: Vec<&str> = match self.dictionary.position(word) {
            Some(slot) => self
                .cache
                .find(slot)
                .unwrap_or_default()
                .iter()
                .filter_map(|&id| self.dictionary.get(id))
                .collect(),
            None => self.index.find_neighbors(word).into_iter().collect(),
        };
        neighbors.sort_by(|a, b| pattern_order(a, b));
        neighbors
    }

    /// Check whether `word2` is one of `word1`'s neighbors.
    pub fn are_neighbors(&self, word1: &str, word2: &str) -> bool {
        match (self.dictionary.position(word1), self.dictionary.position(word2)) {
            (Some(index1), Some(index2)) => self.cache.are_neighbors(index1, index2).unwrap_or(false),
            (None, Some(_)) => self.index.are_neighbors(word1, word2),
            (_, None) => false,
        }
    }

    /// Every shortest word ladder between two dictionary words.
    pub fn ladders(&self, from: &str, to: &str) -> Result<Vec<Vec<&str>>> {
        let from = self.dictionary.index_of(from)?;
        let to = self.dictionary.index_of(to)?;

        shortest_ladders(self, from, to)?
            .into_iter()
            .map(|path| {
                path.into_iter()
                    .map(|id| self.dictionary.word_at(id))
                    .collect::<Result<Vec<&str>>>()
            })
            .collect()
    }
}

/// Reject an index whose word set differs from the dictionary's.
///
/// A dictionary word may be absent from every bucket only when it has no
/// neighbors at all.
fn check_index_matches(dictionary: &Dictionary, index: &PatternIndex) -> Result<()> {
    let mut indexed: AHashSet<&str> = AHashSet::new();
    for (pattern, bucket) in index.iter() {
        for word in bucket {
            if !dictionary.contains(word) {
                return Err(WordlinkError::dictionary_load(format!(
                    "pattern index word {word:?} (pattern {pattern:?}) is not in the dictionary"
                )));
            }
            indexed.insert(word.as_str());
        }
    }

    for word in dictionary.words() {
        if !indexed.contains(word.as_str()) && !index.find_neighbors(word).is_empty() {
            return Err(WordlinkError::dictionary_load(format!(
                "dictionary word {word:?} is missing from the pattern index"
            )));
        }
    }
    Ok(())
}

impl NeighborOracle for WordGraph {
    fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    fn neighbors(&self, index: WordIndex) -> Result<Vec<WordIndex>> {
        self.cache.find(index).map(<[WordIndex]>::to_vec)
    }

    fn are_neighbors(&self, index1: WordIndex, index2: WordIndex) -> Result<bool> {
        self.cache.are_neighbors(index1, index2)
    }
}
