//! Wildcard pattern generation and ordering.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::wildcard::index::{Bucket, PatternIndex};

/// Marker standing for "any single character" (substitution) or "one
/// inserted character" (insertion) inside a pattern.
pub const WILDCARD: char = '*';

/// Iterator over the `2L + 1` wildcard patterns of a word of length `L`.
///
/// The first `L` items are substitution patterns, wildcard moving left to
/// right. The remaining `L + 1` are insertion patterns, the wildcard placed
/// before the first character, between each pair, and after the last.
#[derive(Debug, Clone)]
pub struct WildcardPatterns {
    chars: Vec<char>,
    step: usize,
}

impl WildcardPatterns {
    fn total(&self) -> usize {
        2 * self.chars.len() + 1
    }
}

impl Iterator for WildcardPatterns {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let len = self.chars.len();
        if self.step >= self.total() {
            return None;
        }
        let step = self.step;
        self.step += 1;

        let mut pattern = String::with_capacity(len + 1);
        if step < len {
            for (i, &c) in self.chars.iter().enumerate() {
                pattern.push(if i == step { WILDCARD } else { c });
            }
        } else {
            let gap = step - len;
            pattern.extend(&self.chars[..gap]);
            pattern.push(WILDCARD);
            pattern.extend(&self.chars[gap..]);
        }
        Some(pattern)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WildcardPatterns {}

impl FusedIterator for WildcardPatterns {}

/// Generate every wildcard pattern of `word`.
pub fn wildcard_patterns(word: &str) -> WildcardPatterns {
    WildcardPatterns {
        chars: word.chars().collect(),
        step: 0,
    }
}

/// The patterns of `word` that have a bucket in `index`, paired with it.
///
/// Patterns without a bucket cannot contribute neighbors, so this is only a
/// lookup filter over [`wildcard_patterns`].
pub fn present_patterns<'a>(
    index: &'a PatternIndex,
    word: &str,
) -> impl Iterator<Item = (String, &'a Bucket)> + use<'a> {
    wildcard_patterns(word).filter_map(move |pattern| {
        let bucket = index.bucket(&pattern)?;
        Some((pattern, bucket))
    })
}

/// Char offset of the single wildcard in `pattern`.
///
/// Returns `None` when the pattern has no marker or more than one.
pub fn wildcard_position(pattern: &str) -> Option<usize> {
    let mut found = None;
    for (i, c) in pattern.chars().enumerate() {
        if c == WILDCARD {
            if found.is_some() {
                return None;
            }
            found = Some(i);
        }
    }
    found
}

/// Check whether `pattern` is one of the patterns generated by `word`.
pub fn generates(word: &str, pattern: &str) -> bool {
    if word.contains(WILDCARD) {
        return false;
    }
    let Some(position) = wildcard_position(pattern) else {
        return false;
    };

    let word_len = word.chars().count();
    let pattern_len = pattern.chars().count();

    if word_len == pattern_len {
        word.chars()
            .zip(pattern.chars())
            .enumerate()
            .all(|(i, (w, p))| i == position || w == p)
    } else if word_len + 1 == pattern_len {
        pattern.chars().filter(|&c| c != WILDCARD).eq(word.chars())
    } else {
        false
    }
}

/// Order strings by char length, then lexicographically.
///
/// Used for both pattern lines and bucket members in the persisted format.
pub fn pattern_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}
