//! Shortest word ladders by layered breadth-first search.
//!
//! A [`Frontier`] grows one layer at a time from a root word and remembers,
//! for every reached word, all of its predecessors on the previous layer.
//! Keeping every predecessor is what lets all shortest paths be recovered,
//! not just one.

use ahash::AHashMap;
use log::debug;

use crate::dictionary::WordIndex;
use crate::error::{Result, WordlinkError};
use crate::oracle::NeighborOracle;

/// Word index to its predecessors on the previous layer.
type Layer = AHashMap<WordIndex, Vec<WordIndex>>;

/// One side of a breadth-first search.
#[derive(Debug, Clone)]
pub struct Frontier {
    /// The most recently reached layer.
    outer: Layer,
    /// Every earlier layer.
    searched: Layer,
}

impl Frontier {
    /// Start a search at `root`.
    pub fn new(root: WordIndex) -> Self {
        let mut outer = Layer::new();
        outer.insert(root, Vec::new());
        Frontier {
            outer,
            searched: Layer::new(),
        }
    }

    /// Replace the outer layer with the words one edit beyond it.
    ///
    /// Returns `false`, leaving the frontier untouched, when no new word is
    /// reachable.
    pub fn expand<O: NeighborOracle + ?Sized>(&mut self, oracle: &O) -> Result<bool> {
        let mut next = Layer::new();

        for &word in self.outer.keys() {
            for neighbor in oracle.neighbors(word)? {
                if self.searched.contains_key(&neighbor) || self.outer.contains_key(&neighbor) {
                    continue;
                }
                next.entry(neighbor).or_default().push(word);
            }
        }

        if next.is_empty() {
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.outer, next);
        self.searched.extend(previous);
        Ok(true)
    }

    /// Check if `index` is on the outer layer.
    pub fn outer_contains(&self, index: WordIndex) -> bool {
        self.outer.contains_key(&index)
    }

    /// Size of the outer layer.
    pub fn outer_len(&self) -> usize {
        self.outer.len()
    }

    /// Number of words on earlier layers.
    pub fn searched_len(&self) -> usize {
        self.searched.len()
    }

    /// Words on both frontiers' outer layers, sorted.
    pub fn outer_intersection(&self, other: &Frontier) -> Vec<WordIndex> {
        let (smaller, larger) = if self.outer.len() <= other.outer.len() {
            (&self.outer, &other.outer)
        } else {
            (&other.outer, &self.outer)
        };

        let mut shared: Vec<WordIndex> = smaller
            .keys()
            .copied()
            .filter(|index| larger.contains_key(index))
            .collect();
        shared.sort_unstable();
        shared
    }

    /// Every path from the root to `index`, root first.
    ///
    /// Empty when `index` has not been reached.
    pub fn paths_to(&self, index: WordIndex) -> Vec<Vec<WordIndex>> {
        let Some(predecessors) = self.outer.get(&index).or_else(|| self.searched.get(&index)) else {
            return Vec::new();
        };
        if predecessors.is_empty() {
            return vec![vec![index]];
        }

        let mut paths = Vec::new();
        for &previous in predecessors {
            for mut path in self.paths_to(previous) {
                path.push(index);
                paths.push(path);
            }
        }
        paths
    }
}

/// Every shortest ladder from `from` to `to`, each a sequence of word
/// indices where consecutive entries are one edit apart.
///
/// Both ends grow alternately, the smaller outer layer first, until their
/// outer layers meet. Returns no ladders when the words are disconnected.
pub fn shortest_ladders<O: NeighborOracle + ?Sized>(
    oracle: &O,
    from: WordIndex,
    to: WordIndex,
) -> Result<Vec<Vec<WordIndex>>> {
    let count = oracle.word_count();
    for index in [from, to] {
        if index >= count {
            return Err(WordlinkError::unknown_index(index, count));
        }
    }
    if from == to {
        return Ok(vec![vec![from]]);
    }

    let mut forward = Frontier::new(from);
    let mut backward = Frontier::new(to);
    let mut depth = 0;

    loop {
        let expanded = if forward.outer_len() <= backward.outer_len() {
            forward.expand(oracle)?
        } else {
            backward.expand(oracle)?
        };
        if !expanded {
            debug!("No ladder between {from} and {to} after {depth} layers");
            return Ok(Vec::new());
        }
        depth += 1;

        let meeting = forward.outer_intersection(&backward);
        if meeting.is_empty() {
            continue;
        }

        let mut ladders = Vec::new();
        for &middle in &meeting {
            let tails = backward.paths_to(middle);
            for head in forward.paths_to(middle) {
                for tail in &tails {
                    let mut ladder = head.clone();
                    ladder.extend(tail.iter().rev().skip(1));
                    ladders.push(ladder);
                }
            }
        }
        ladders.sort();
        debug!(
            "Found {} ladders of length {} between {from} and {to}",
            ladders.len(),
            depth + 1
        );
        return Ok(ladders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::dictionary::Dictionary;
    use crate::oracle::{LinearScan, WordGraph};

    fn graph(words: &[&str]) -> WordGraph {
        let dict = Dictionary::from_words(words.iter().copied()).unwrap();
        WordGraph::from_dictionary(dict, &IndexConfig::sequential()).unwrap()
    }

    #[test]
    fn test_frontier_layers() {
        let graph = graph(&["cat", "cot", "cog", "dog", "do"]);
        let mut frontier = Frontier::new(0);

        assert!(frontier.outer_contains(0));
        assert!(frontier.expand(&graph).unwrap());
        assert!(frontier.outer_contains(1));
        assert_eq!(frontier.searched_len(), 1);

        assert!(frontier.expand(&graph).unwrap());
        assert!(frontier.expand(&graph).unwrap());
        assert!(frontier.expand(&graph).unwrap());
        assert!(frontier.outer_contains(4));
        assert!(!frontier.expand(&graph).unwrap());
        assert!(frontier.outer_contains(4));
        assert_eq!(frontier.paths_to(4), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_all_shortest_paths() {
        let graph = graph(&["cat", "cot", "bat", "bot", "cog"]);
        let ladders = shortest_ladders(&graph, 0, 3).unwrap();
        assert_eq!(ladders, vec![vec![0, 1, 3], vec![0, 2, 3]]);
    }

    #[test]
    fn test_odd_and_even_lengths() {
        let graph = graph(&["a", "at", "cat", "cot", "cots", "coats"]);
        assert_eq!(
            shortest_ladders(&graph, 0, 5).unwrap(),
            vec![vec![0, 1, 2, 3, 4, 5]]
        );
        assert_eq!(shortest_ladders(&graph, 0, 1).unwrap(), vec![vec![0, 1]]);
        assert_eq!(shortest_ladders(&graph, 5, 0).unwrap(), vec![vec![5, 4, 3, 2, 1, 0]]);
    }

    #[test]
    fn test_disconnected_and_trivial() {
        let graph = graph(&["cat", "cot", "zebra"]);
        assert!(shortest_ladders(&graph, 0, 2).unwrap().is_empty());
        assert_eq!(shortest_ladders(&graph, 2, 2).unwrap(), vec![vec![2]]);
        assert!(matches!(
            shortest_ladders(&graph, 0, 7),
            Err(WordlinkError::UnknownIndex { .. })
        ));
    }

    #[test]
    fn test_same_ladders_from_linear_scan() {
        let words = ["cold", "cord", "card", "ward", "warm", "corm", "worm", "word", "wold"];
        let dict = Dictionary::from_words(words).unwrap();
        let graph = WordGraph::from_dictionary(dict.clone(), &IndexConfig::sequential()).unwrap();
        let scan = LinearScan::new(dict);

        let expected = shortest_ladders(&graph, 0, 4).unwrap();
        assert!(!expected.is_empty());
        assert!(expected.iter().all(|ladder| ladder.len() == expected[0].len()));
        assert_eq!(shortest_ladders(&scan, 0, 4).unwrap(), expected);
    }
}
