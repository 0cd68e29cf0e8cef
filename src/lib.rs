//! # Wordlink
//!
//! Answers "which words are exactly one edit apart?" for a static word list:
//! the adjacency oracle underneath word-ladder puzzles.
//!
//! ## Features
//!
//! - Wildcard pattern index with substitution and insertion patterns
//! - Neighbor queries and adjacency tests for any word
//! - Precomputed neighbor cache over dictionary indices
//! - Text persistence of the pattern index
//! - Shortest word ladders over any neighbor oracle
//!
//! ```
//! use wordlink::config::IndexConfig;
//! use wordlink::dictionary::Dictionary;
//! use wordlink::oracle::WordGraph;
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog", "do"]).unwrap();
//! let graph = WordGraph::from_dictionary(dictionary, &IndexConfig::default()).unwrap();
//!
//! assert!(graph.are_neighbors("do", "dog"));
//! assert!(!graph.are_neighbors("cat", "cog"));
//! assert_eq!(graph.find_neighbors("cot"), vec!["cat", "cog"]);
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod edit;
pub mod error;
pub mod ladder;
pub mod oracle;
pub mod wildcard;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
