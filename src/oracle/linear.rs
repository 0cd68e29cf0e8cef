//! Index-free oracle comparing words directly.

use std::ops::Range;

use crate::dictionary::{Dictionary, WordIndex};
use crate::edit::is_one_edit_apart;
use crate::error::Result;
use crate::oracle::NeighborOracle;

/// Answers adjacency queries by scanning the dictionary.
///
/// When the dictionary is ordered by word length, only the entries whose
/// length is within one of the query are compared.
#[derive(Debug, Clone)]
pub struct LinearScan {
    dictionary: Dictionary,
    /// Char length of each entry.
    lengths: Vec<usize>,
    length_sorted: bool,
}

impl LinearScan {
    /// Create a scanner over `dictionary`.
    pub fn new(dictionary: Dictionary) -> Self {
        let lengths: Vec<usize> = dictionary
            .words()
            .iter()
            .map(|word| word.chars().count())
            .collect();
        let length_sorted = lengths.windows(2).all(|pair| pair[0] <= pair[1]);

        LinearScan {
            dictionary,
            lengths,
            length_sorted,
        }
    }

    /// The scanned dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether scans can be narrowed to a length window.
    pub fn is_length_sorted(&self) -> bool {
        self.length_sorted
    }

    /// Slots that can hold a neighbor of a word with `len` chars.
    fn candidate_range(&self, len: usize) -> Range<usize> {
        if !self.length_sorted {
            return 0..self.lengths.len();
        }
        let start = self.lengths.partition_point(|&l| l + 1 < len);
        let end = self.lengths.partition_point(|&l| l <= len + 1);
        start..end
    }
}

impl NeighborOracle for LinearScan {
    fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    fn neighbors(&self, index: WordIndex) -> Result<Vec<WordIndex>> {
        let word = self.dictionary.word_at(index)?;
        let words = self.dictionary.words();

        Ok(self
            .candidate_range(self.lengths[index])
            .filter(|&slot| {
                is_one_edit_apart(word, &words[slot])
                    && self.dictionary.position(&words[slot]) == Some(slot)
            })
            .collect())
    }

    fn are_neighbors(&self, index1: WordIndex, index2: WordIndex) -> Result<bool> {
        let word1 = self.dictionary.word_at(index1)?;
        let word2 = self.dictionary.word_at(index2)?;
        Ok(is_one_edit_apart(word1, word2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::oracle::WordGraph;

    #[test]
    fn test_length_window() {
        let dict = Dictionary::from_words(["a", "do", "at", "cat", "cot", "dog", "cart", "carts"]).unwrap();
        let scan = LinearScan::new(dict);
        assert!(scan.is_length_sorted());
        assert_eq!(scan.candidate_range(1), 0..3);
        assert_eq!(scan.candidate_range(3), 1..7);
        assert_eq!(scan.candidate_range(5), 6..8);
    }

    #[test]
    fn test_unsorted_dictionary_scans_everything() {
        let dict = Dictionary::from_words(["cat", "do", "dog"]).unwrap();
        let scan = LinearScan::new(dict);
        assert!(!scan.is_length_sorted());
        assert_eq!(scan.neighbors(2).unwrap(), vec![1]);
    }

    #[test]
    fn test_agrees_with_word_graph() {
        let words = ["a", "i", "at", "do", "an", "ant", "cat", "cot", "dog", "cog", "cart", "coat"];
        let dict = Dictionary::from_words(words).unwrap();
        let graph = WordGraph::from_dictionary(dict.clone(), &IndexConfig::sequential()).unwrap();
        let scan = LinearScan::new(dict);

        for i in 0..words.len() {
            assert_eq!(scan.neighbors(i).unwrap(), graph.neighbors(i).unwrap(), "word {}", words[i]);
            for j in 0..words.len() {
                assert_eq!(
                    scan.are_neighbors(i, j).unwrap(),
                    NeighborOracle::are_neighbors(&graph, i, j).unwrap(),
                    "{} vs {}",
                    words[i],
                    words[j]
                );
            }
        }
    }

    #[test]
    fn test_unknown_index() {
        let scan = LinearScan::new(Dictionary::from_words(["cat"]).unwrap());
        assert!(scan.neighbors(3).is_err());
        assert!(scan.are_neighbors(0, 3).is_err());
    }
}
