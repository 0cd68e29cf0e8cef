//! Precomputed neighbor lists for every dictionary entry.

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::IndexConfig;
use crate::dictionary::{Dictionary, WordIndex};
use crate::error::{Result, WordlinkError};
use crate::wildcard::index::PatternIndex;

/// Neighbor lists keyed by [`WordIndex`], materialized once from a finished
/// [`PatternIndex`].
///
/// Each list is sorted and holds the first-occurrence index of every
/// neighboring word. A new index means a new cache; there is no partial
/// update.
#[derive(Debug, Clone, Default)]
pub struct NeighborCache {
    neighbors: Vec<Vec<WordIndex>>,
    /// First-occurrence index for every slot, so duplicate entries compare equal.
    canonical: Vec<WordIndex>,
}

impl NeighborCache {
    /// Query `index` once for every dictionary entry.
    pub fn build(dictionary: &Dictionary, index: &PatternIndex, config: &IndexConfig) -> Self {
        let start_time = Instant::now();
        let count = dictionary.len();

        let neighbors: Vec<Vec<WordIndex>> = if config.use_parallel(count) {
            (0..count)
                .into_par_iter()
                .map(|slot| neighbor_ids(dictionary, index, slot))
                .collect()
        } else {
            (0..count)
                .map(|slot| neighbor_ids(dictionary, index, slot))
                .collect()
        };

        let canonical = dictionary
            .iter()
            .map(|(slot, word)| dictionary.position(word).unwrap_or(slot))
            .collect();

        let cache = NeighborCache {
            neighbors,
            canonical,
        };
        info!(
            "Built neighbor cache: {} entries, {} edges in {} ms",
            cache.len(),
            cache.edge_count(),
            start_time.elapsed().as_millis()
        );
        cache
    }

    /// Sorted neighbor indices of a dictionary entry.
    pub fn find(&self, index: WordIndex) -> Result<&[WordIndex]> {
        self.neighbors
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| WordlinkError::unknown_index(index, self.len()))
    }

    /// Check adjacency by searching the shorter of the two neighbor lists.
    pub fn are_neighbors(&self, index1: WordIndex, index2: WordIndex) -> Result<bool> {
        let neighbors1 = self.find(index1)?;
        let neighbors2 = self.find(index2)?;
        let target1 = self.canonical[index1];
        let target2 = self.canonical[index2];

        Ok(if neighbors1.len() <= neighbors2.len() {
            neighbors1.binary_search(&target2).is_ok()
        } else {
            neighbors2.binary_search(&target1).is_ok()
        })
    }

    /// Number of neighbors of a dictionary entry.
    pub fn degree(&self, index: WordIndex) -> Result<usize> {
        self.find(index).map(<[WordIndex]>::len)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Slots holding the first occurrence of their word.
    pub fn distinct_slots(&self) -> impl Iterator<Item = WordIndex> + '_ {
        self.canonical
            .iter()
            .enumerate()
            .filter(|&(slot, &first)| slot == first)
            .map(|(slot, _)| slot)
    }

    /// Number of adjacent pairs of distinct words.
    pub fn edge_count(&self) -> usize {
        let endpoints: usize = self
            .distinct_slots()
            .map(|slot| self.neighbors[slot].len())
            .sum();
        endpoints / 2
    }
}

fn neighbor_ids(dictionary: &Dictionary, index: &PatternIndex, slot: WordIndex) -> Vec<WordIndex> {
    let word = &dictionary.words()[slot];
    let mut ids: Vec<WordIndex> = index
        .find_neighbors(word)
        .into_iter()
        .filter_map(|neighbor| dictionary.position(neighbor))
        .collect();
    ids.sort_unstable();
    ids
}
