//! Text persistence for [`PatternIndex`].
//!
//! One line per bucket:
//!
//! ```text
//! <pattern> -> <word1> <word2> ... <wordK>
//! ```
//!
//! Lines are ordered by [`pattern_order`], and so are the words on each line.
//! Reading is fail-fast: the first malformed line aborts the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Result, WordlinkError};
use crate::wildcard::index::{Bucket, BucketMap, PatternIndex};
use crate::wildcard::pattern::{generates, pattern_order, wildcard_position};

/// Token between a pattern and its bucket members.
pub const SEPARATOR: &str = " -> ";

/// Write `index` in the canonical text format.
pub fn write_index<W: Write>(index: &PatternIndex, mut writer: W) -> Result<()> {
    let mut lines: Vec<(&str, &Bucket)> = index.iter().collect();
    lines.sort_by(|a, b| pattern_order(a.0, b.0));

    for (pattern, bucket) in lines {
        let mut members: Vec<&str> = bucket.iter().map(String::as_str).collect();
        members.sort_by(|a, b| pattern_order(a, b));
        writeln!(writer, "{pattern}{SEPARATOR}{}", members.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read an index written by [`write_index`].
pub fn read_index<R: BufRead>(reader: R) -> Result<PatternIndex> {
    let mut buckets = BucketMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (pattern, bucket) = parse_line(line_num + 1, line)?;
        if buckets.contains_key(&pattern) {
            return Err(WordlinkError::parse(
                line_num + 1,
                format!("pattern {pattern:?} appears more than once"),
            ));
        }
        buckets.insert(pattern, bucket);
    }

    Ok(PatternIndex::from_buckets(buckets))
}

fn parse_line(line_num: usize, line: &str) -> Result<(String, Bucket)> {
    let (pattern, members) = line
        .split_once(SEPARATOR)
        .ok_or_else(|| WordlinkError::parse(line_num, format!("missing separator {SEPARATOR:?}")))?;
    let pattern = pattern.trim();

    if wildcard_position(pattern).is_none() {
        return Err(WordlinkError::parse(
            line_num,
            format!("pattern {pattern:?} must contain exactly one wildcard"),
        ));
    }

    let mut bucket = Bucket::new();
    for word in members.split_whitespace() {
        if !generates(word, pattern) {
            return Err(WordlinkError::parse(
                line_num,
                format!("word {word:?} does not match pattern {pattern:?}"),
            ));
        }
        bucket.insert(word.to_string());
    }

    if bucket.len() < 2 {
        return Err(WordlinkError::parse(
            line_num,
            format!("pattern {pattern:?} has fewer than two distinct words"),
        ));
    }

    Ok((pattern.to_string(), bucket))
}

/// Save `index` to a file, replacing any existing content.
pub fn save_index<P: AsRef<Path>>(index: &PatternIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_index(index, BufWriter::new(file))?;
    info!("Saved {} patterns to {}", index.len(), path.display());
    Ok(())
}

/// Load an index saved by [`save_index`].
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<PatternIndex> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let index = read_index(BufReader::new(file))?;
    info!("Loaded {} patterns from {}", index.len(), path.display());
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::dictionary::Dictionary;
    use tempfile::NamedTempFile;

    fn sample_index() -> PatternIndex {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog", "do", "d"]).unwrap();
        PatternIndex::build(&dict, &IndexConfig::sequential()).unwrap()
    }

    fn to_text(index: &PatternIndex) -> String {
        let mut buffer = Vec::new();
        write_index(index, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_is_sorted() {
        let text = to_text(&sample_index());
        assert_eq!(
            text,
            "d* -> d do\n\
             *og -> cog dog\n\
             c*t -> cat cot\n\
             co* -> cog cot\n\
             do* -> do dog\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let index = sample_index();
        let reloaded = read_index(to_text(&index).as_bytes()).unwrap();

        assert_eq!(index, reloaded);
        for (a, b) in [("cat", "cot"), ("do", "dog"), ("d", "do"), ("cat", "cog")] {
            assert_eq!(index.are_neighbors(a, b), reloaded.are_neighbors(a, b));
        }
    }

    #[test]
    fn test_file_round_trip() {
        let index = sample_index();
        let temp_file = NamedTempFile::new().unwrap();

        save_index(&index, temp_file.path()).unwrap();
        let loaded = load_index(temp_file.path()).unwrap();
        assert_eq!(index, loaded);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let index = read_index("c*t -> cat cot\n\n".as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_malformed_lines_fail() {
        let cases = [
            ("c*t cat cot\n", 1),
            ("c*t -> cat cot\ncat -> cat cot\n", 2),
            ("c**t -> cat cot\n", 1),
            ("c*t -> cat\n", 1),
            ("c*t -> cat cat\n", 1),
            ("c*t -> cat dog\n", 1),
            ("c*t -> cat cot\nc*t -> cut cot\n", 2),
        ];

        for (text, expected_line) in cases {
            match read_index(text.as_bytes()) {
                Err(WordlinkError::Parse { line, .. }) => {
                    assert_eq!(line, expected_line, "input {text:?}")
                }
                other => panic!("Expected parse error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_index("/nonexistent/patterns.txt"),
            Err(WordlinkError::Io(_))
        ));
    }
}
