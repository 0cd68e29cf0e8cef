//! Dictionary store: an ordered word list with word/index lookups.
//!
//! A word's [`WordIndex`] is its position in load order. Everything built on
//! top of a dictionary (pattern index, neighbor cache, ladders) treats it as
//! an immutable snapshot.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};

use crate::error::{Result, WordlinkError};
use crate::wildcard::WILDCARD;

/// Stable identifier of a word: its position in the dictionary.
pub type WordIndex = usize;

/// An ordered, immutable word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Words in load order.
    words: Vec<String>,
    /// Word to the index of its first occurrence.
    positions: AHashMap<String, WordIndex>,
}

impl Dictionary {
    /// Build a dictionary from in-memory words, validating each one.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Dictionary::default();
        for (i, word) in words.into_iter().enumerate() {
            let word = word.into();
            validate_word(&word).map_err(|msg| {
                WordlinkError::dictionary_load(format!("entry {}: {msg}", i + 1))
            })?;
            dictionary.push(word);
        }
        dictionary.report_duplicates();
        Ok(dictionary)
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut dictionary = Dictionary::default();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            validate_word(word).map_err(|msg| {
                WordlinkError::dictionary_load(format!(
                    "{}:{}: {msg}",
                    path.display(),
                    line_num + 1
                ))
            })?;
            dictionary.push(word.to_string());
        }

        dictionary.report_duplicates();
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn push(&mut self, word: String) {
        let index = self.words.len();
        self.positions.entry(word.clone()).or_insert(index);
        self.words.push(word);
    }

    fn report_duplicates(&self) {
        let duplicates = self.words.len() - self.positions.len();
        if duplicates > 0 {
            warn!("Dictionary contains {duplicates} duplicate words; first occurrences keep their index");
        }
    }

    /// Look up the index of a word.
    pub fn index_of(&self, word: &str) -> Result<WordIndex> {
        self.position(word)
            .ok_or_else(|| WordlinkError::unknown_word(word))
    }

    /// Look up the word at an index.
    pub fn word_at(&self, index: WordIndex) -> Result<&str> {
        self.get(index)
            .ok_or_else(|| WordlinkError::unknown_index(index, self.len()))
    }

    /// Index of a word, if present.
    pub fn position(&self, word: &str) -> Option<WordIndex> {
        self.positions.get(word).copied()
    }

    /// Word at an index, if in range.
    pub fn get(&self, index: WordIndex) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct words.
    pub fn distinct_len(&self) -> usize {
        self.positions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over `(index, word)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &str)> {
        self.words.iter().map(String::as_str).enumerate()
    }
}

/// A word must be non-empty and free of whitespace and the wildcard marker.
pub(crate) fn validate_word(word: &str) -> std::result::Result<(), String> {
    if word.is_empty() {
        return Err("empty word".to_string());
    }
    if word.contains(WILDCARD) {
        return Err(format!("word {word:?} contains the wildcard marker '{WILDCARD}'"));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(format!("word {word:?} contains whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_lookups() {
        let dict = Dictionary::from_words(["cat", "cot", "cog"]).unwrap();

        assert_eq!(dict.len(), 3);
        assert!(!dict.is_empty());
        assert_eq!(dict.index_of("cot").unwrap(), 1);
        assert_eq!(dict.word_at(2).unwrap(), "cog");
        assert!(dict.contains("cat"));
        assert!(!dict.contains("dog"));
        assert_eq!(dict.position("dog"), None);
        assert_eq!(dict.get(3), None);
    }

    #[test]
    fn test_unknown_word_and_index() {
        let dict = Dictionary::from_words(["cat"]).unwrap();

        match dict.index_of("dog") {
            Err(WordlinkError::UnknownWord(word)) => assert_eq!(word, "dog"),
            other => panic!("Expected unknown word error, got {other:?}"),
        }
        match dict.word_at(5) {
            Err(WordlinkError::UnknownIndex { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 1);
            }
            other => panic!("Expected unknown index error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        let dict = Dictionary::from_words(["cat", "dog", "cat"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.distinct_len(), 2);
        assert_eq!(dict.index_of("cat").unwrap(), 0);
        assert_eq!(dict.word_at(2).unwrap(), "cat");
    }

    #[test]
    fn test_invalid_words_rejected() {
        assert!(matches!(
            Dictionary::from_words(["ca*t"]),
            Err(WordlinkError::DictionaryLoad(_))
        ));
        assert!(matches!(
            Dictionary::from_words(["two words"]),
            Err(WordlinkError::DictionaryLoad(_))
        ));
        assert!(matches!(
            Dictionary::from_words([""]),
            Err(WordlinkError::DictionaryLoad(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat").unwrap();
        writeln!(temp_file, "  cot  ").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "café").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load(temp_file.path()).unwrap();
        assert_eq!(dict.words(), &["cat", "cot", "café"]);
        let pairs: Vec<_> = dict.iter().collect();
        assert_eq!(pairs[1], (1, "cot"));
    }

    #[test]
    fn test_load_reports_bad_line() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat").unwrap();
        writeln!(temp_file, "c*t").unwrap();
        temp_file.flush().unwrap();

        match Dictionary::load(temp_file.path()) {
            Err(WordlinkError::DictionaryLoad(msg)) => assert!(msg.contains(":2:")),
            other => panic!("Expected dictionary load error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load("/nonexistent/words.txt");
        assert!(matches!(result, Err(WordlinkError::Io(_))));
    }
}
