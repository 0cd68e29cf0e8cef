//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordlinkArgs};
use crate::error::Result;

/// Neighbors of one query word.
#[derive(Debug, Serialize, Deserialize)]
pub struct NeighborResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
}

/// Adjacency of two words.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdjacencyResult {
    pub word1: String,
    pub word2: String,
    pub neighbors: bool,
}

/// Result of building and saving a pattern index.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub output: String,
    pub dictionary_words: usize,
    pub patterns: usize,
    pub duration_ms: u64,
}

/// Shortest ladders between two words.
#[derive(Debug, Serialize, Deserialize)]
pub struct LadderResult {
    pub from: String,
    pub to: String,
    pub length: Option<usize>,
    pub ladders: Vec<Vec<String>>,
}

/// Dictionary and index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub dictionary_words: usize,
    pub distinct_words: usize,
    pub patterns: usize,
    pub connected_words: usize,
    pub isolated_words: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub average_degree: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordlinkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordlinkArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                if let serde_json::Value::Object(obj) = item {
                    for (key, val) in obj {
                        println!("{key}: {}", format_value(val));
                    }
                } else {
                    println!("{}", format_value(item));
                }
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordlinkArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output. Word lists print space-separated,
/// ladders one per line joined by arrows.
pub fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) if items.iter().all(|i| i.is_array()) => items
            .iter()
            .filter_map(|i| i.as_array())
            .map(|ladder| {
                let words: Vec<String> = ladder.iter().map(format_value).collect();
                format!("\n  {}", words.join(" -> "))
            })
            .collect(),
        serde_json::Value::Array(items) => {
            let words: Vec<String> = items.iter().map(format_value).collect();
            words.join(" ")
        }
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.2}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
