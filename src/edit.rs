//! Direct one-edit check between two words.
//!
//! Works without any index; the linear-scan oracle and the property tests
//! both rely on it.

/// Check whether two words are exactly one substitution, insertion or
/// deletion apart. Identical words are not.
pub fn is_one_edit_apart(word1: &str, word2: &str) -> bool {
    let chars1: Vec<char> = word1.chars().collect();
    let chars2: Vec<char> = word2.chars().collect();

    let (shorter, longer) = if chars1.len() <= chars2.len() {
        (&chars1, &chars2)
    } else {
        (&chars2, &chars1)
    };

    match longer.len() - shorter.len() {
        0 => {
            shorter
                .iter()
                .zip(longer.iter())
                .filter(|(a, b)| a != b)
                .count()
                == 1
        }
        1 => {
            let prefix = shorter
                .iter()
                .zip(longer.iter())
                .take_while(|(a, b)| a == b)
                .count();
            shorter[prefix..] == longer[prefix + 1..]
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::min;

    /// Full Levenshtein distance with early exit, used as a reference.
    #[allow(clippy::needless_range_loop)]
    fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
        let len1 = s1.chars().count();
        let len2 = s2.chars().count();

        if len1.abs_diff(len2) > threshold {
            return None;
        }

        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        // Two rows are enough
        let mut prev_row: Vec<usize> = (0..=len2).collect();
        let mut curr_row = vec![0; len2 + 1];

        for i in 1..=len1 {
            curr_row[0] = i;
            let mut min_in_row = i;

            for j in 1..=len2 {
                let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
                curr_row[j] = min(
                    min(prev_row[j] + 1, curr_row[j - 1] + 1),
                    prev_row[j - 1] + cost,
                );
                min_in_row = min(min_in_row, curr_row[j]);
            }

            if min_in_row > threshold {
                return None;
            }

            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        let distance = prev_row[len2];
        (distance <= threshold).then_some(distance)
    }

    #[test]
    fn test_substitution() {
        assert!(is_one_edit_apart("cat", "cot"));
        assert!(!is_one_edit_apart("cat", "cog"));
        assert!(!is_one_edit_apart("cat", "cat"));
    }

    #[test]
    fn test_insertion_and_deletion() {
        assert!(is_one_edit_apart("do", "dog"));
        assert!(is_one_edit_apart("dog", "do"));
        assert!(is_one_edit_apart("ate", "xate"));
        assert!(is_one_edit_apart("ate", "atxe"));
        assert!(is_one_edit_apart("", "a"));
        assert!(!is_one_edit_apart("do", "dogs"));
        assert!(!is_one_edit_apart("abc", "xabd"));
    }

    #[test]
    fn test_unicode() {
        assert!(is_one_edit_apart("naive", "naïve"));
        assert!(is_one_edit_apart("nave", "naïve"));
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_threshold("search", "search", 0), Some(0));
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "a", 1), Some(1));
    }

    #[test]
    fn test_agrees_with_distance() {
        let words = ["", "a", "ab", "ba", "abc", "acb", "abd", "xabc", "abcx", "bc"];
        for a in words {
            for b in words {
                assert_eq!(
                    is_one_edit_apart(a, b),
                    levenshtein_distance_threshold(a, b, 1) == Some(1),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }
}
