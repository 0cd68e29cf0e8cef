//! Neighbor queries against a [`PatternIndex`].
//!
//! A word never counts as its own neighbor, even though it sits in every
//! bucket it generates. Words absent from the dictionary are legal queries
//! and see whichever dictionary words share one of their patterns.

use ahash::AHashSet;

use crate::wildcard::index::PatternIndex;
use crate::wildcard::pattern::{generates, present_patterns};

impl PatternIndex {
    /// All dictionary words exactly one edit away from `word`.
    pub fn find_neighbors(&self, word: &str) -> AHashSet<&str> {
        self.find_neighbors_excluding(word, std::iter::empty::<&str>())
    }

    /// Like [`find_neighbors`](Self::find_neighbors), minus the words in `exclude`.
    pub fn find_neighbors_excluding<I, S>(&self, word: &str, exclude: I) -> AHashSet<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut neighbors = AHashSet::new();
        for (_, bucket) in present_patterns(self, word) {
            neighbors.extend(bucket.iter().map(String::as_str));
        }
        neighbors.remove(word);
        for excluded in exclude {
            neighbors.remove(excluded.as_ref());
        }
        neighbors
    }

    /// Check whether `word2` is one of `word1`'s neighbors.
    ///
    /// Only the buckets of the word with the smaller summed bucket size are
    /// scanned, stopping at the first bucket that witnesses the pair.
    pub fn are_neighbors(&self, word1: &str, word2: &str) -> bool {
        if word1 == word2 {
            return false;
        }
        if word1.chars().count().abs_diff(word2.chars().count()) > 1 {
            return false;
        }

        if self.neighbor_mass(word1) <= self.neighbor_mass(word2) {
            present_patterns(self, word1).any(|(_, bucket)| bucket.contains(word2))
        } else {
            // word2 must itself sit in the shared bucket, and word1 must
            // generate that bucket's pattern.
            present_patterns(self, word2)
                .any(|(pattern, bucket)| bucket.contains(word2) && generates(word1, &pattern))
        }
    }

    /// Upper bound on the neighbor count of `word`: its present bucket sizes summed.
    pub fn neighbor_mass(&self, word: &str) -> usize {
        present_patterns(self, word)
            .map(|(_, bucket)| bucket.len())
            .sum()
    }
}
