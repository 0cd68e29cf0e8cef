//! Index-level adjacency oracles.
//!
//! [`NeighborOracle`] is the seam the ladder search runs against. The
//! cache-backed [`WordGraph`] answers from precomputed neighbor lists; the
//! [`LinearScan`] oracle compares words directly and needs no index at all.

pub mod graph;
pub mod linear;

use crate::dictionary::WordIndex;
use crate::error::Result;

pub use graph::WordGraph;
pub use linear::LinearScan;

/// Adjacency answers over the word indices of one dictionary.
pub trait NeighborOracle: Send + Sync + std::fmt::Debug {
    /// Number of dictionary entries.
    fn word_count(&self) -> usize;

    /// Indices of all words one edit away from the word at `index`.
    fn neighbors(&self, index: WordIndex) -> Result<Vec<WordIndex>>;

    /// Check whether the words at two indices are one edit apart.
    fn are_neighbors(&self, index1: WordIndex, index2: WordIndex) -> Result<bool>;
}
