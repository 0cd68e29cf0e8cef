//! Wildcard pattern index: the one-edit adjacency oracle.
//!
//! Every word of length L is registered under its L substitution patterns
//! (one position replaced by [`WILDCARD`]) and its L+1 insertion patterns
//! (the marker placed in one of the gaps). Two words are one edit apart
//! exactly when they share a pattern: equal-length words through a
//! substitution pattern, and a word one character longer through its
//! substitution pattern colliding with the shorter word's insertion pattern.

pub mod cache;
pub mod codec;
pub mod index;
pub mod pattern;
pub mod query;

// Re-export commonly used types
pub use cache::*;
pub use codec::*;
pub use index::*;
pub use pattern::*;
