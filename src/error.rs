//! Error types for the Wordlink library.
//!
//! All fallible operations return [`WordlinkError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use wordlink::error::{Result, WordlinkError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordlinkError::unknown_word("zzyzx"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordlink operations.
#[derive(Error, Debug)]
pub enum WordlinkError {
    /// I/O errors (missing dictionary, unreadable index file, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dictionary source contained an entry that cannot be indexed
    #[error("Dictionary load error: {0}")]
    DictionaryLoad(String),

    /// A word that is not part of the dictionary
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// A word index outside the dictionary's range
    #[error("Unknown index: {index} (dictionary has {len} words)")]
    UnknownIndex { index: usize, len: usize },

    /// A malformed line in a persisted pattern index
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordlinkError.
pub type Result<T> = std::result::Result<T, WordlinkError>;

impl WordlinkError {
    /// Create a new dictionary load error.
    pub fn dictionary_load<S: Into<String>>(msg: S) -> Self {
        WordlinkError::DictionaryLoad(msg.into())
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        WordlinkError::UnknownWord(word.into())
    }

    /// Create a new unknown index error.
    pub fn unknown_index(index: usize, len: usize) -> Self {
        WordlinkError::UnknownIndex { index, len }
    }

    /// Create a new parse error for a 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        WordlinkError::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordlinkError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordlinkError::Other(msg.into())
    }
}
