//! Command implementations for the Wordlink CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::IndexConfig;
use crate::dictionary::Dictionary;
use crate::error::{Result, WordlinkError};
use crate::ladder::shortest_ladders;
use crate::oracle::{LinearScan, NeighborOracle, WordGraph};
use crate::wildcard::{PatternIndex, save_index};

/// Execute a CLI command.
pub fn execute_command(args: WordlinkArgs) -> Result<()> {
    match &args.command {
        Command::Neighbors(neighbors_args) => find_neighbors(neighbors_args, &args),
        Command::Check(check_args) => check_adjacency(check_args, &args),
        Command::BuildIndex(build_args) => build_index(build_args, &args),
        Command::Ladder(ladder_args) => find_ladders(ladder_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<IndexConfig> {
    match path {
        Some(path) => IndexConfig::load_from_file(path),
        None => Ok(IndexConfig::default()),
    }
}

/// Open the word graph, reusing a saved index when one is given.
fn open_graph(graph_args: &GraphArgs) -> Result<WordGraph> {
    let config = load_config(graph_args.config.as_deref())?;
    match &graph_args.index {
        Some(index_path) => WordGraph::open_with_index(&graph_args.dictionary, index_path, &config),
        None => WordGraph::open(&graph_args.dictionary, &config),
    }
}

/// Print the neighbors of each query word.
fn find_neighbors(args: &NeighborsArgs, cli_args: &WordlinkArgs) -> Result<()> {
    let graph = open_graph(&args.graph)?;

    let results: Vec<NeighborResult> = args
        .words
        .iter()
        .map(|word| NeighborResult {
            word: word.clone(),
            in_dictionary: graph.dictionary().contains(word),
            neighbors: graph
                .find_neighbors(word)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();

    output_result("Neighbors", &results, cli_args)
}

/// Print whether two words are one edit apart.
fn check_adjacency(args: &CheckArgs, cli_args: &WordlinkArgs) -> Result<()> {
    let graph = open_graph(&args.graph)?;

    output_result(
        "Adjacency",
        &AdjacencyResult {
            word1: args.word1.clone(),
            word2: args.word2.clone(),
            neighbors: graph.are_neighbors(&args.word1, &args.word2),
        },
        cli_args,
    )
}

/// Build a pattern index and write it in the text format.
fn build_index(args: &BuildIndexArgs, cli_args: &WordlinkArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(WordlinkError::other(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    let start_time = Instant::now();
    let config = load_config(args.config.as_deref())?;
    let dictionary = Dictionary::load(&args.dictionary)?;
    let index = PatternIndex::build(&dictionary, &config)?;
    save_index(&index, &args.output)?;

    output_result(
        "Pattern index saved",
        &IndexBuildResult {
            output: args.output.to_string_lossy().to_string(),
            dictionary_words: dictionary.len(),
            patterns: index.len(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Print every shortest ladder between two words.
fn find_ladders(args: &LadderArgs, cli_args: &WordlinkArgs) -> Result<()> {
    let ladders: Vec<Vec<String>> = if args.linear {
        let dictionary = Dictionary::load(&args.graph.dictionary)?;
        let from = dictionary.index_of(&args.from)?;
        let to = dictionary.index_of(&args.to)?;
        let scan = LinearScan::new(dictionary);
        info!(
            "Searching ladders by linear scan (length sorted: {})",
            scan.is_length_sorted()
        );
        shortest_ladders(&scan, from, to)?
            .into_iter()
            .map(|ladder| {
                ladder
                    .into_iter()
                    .map(|id| scan.dictionary().word_at(id).map(str::to_string))
                    .collect::<Result<Vec<String>>>()
            })
            .collect::<Result<_>>()?
    } else {
        let graph = open_graph(&args.graph)?;
        graph
            .ladders(&args.from, &args.to)?
            .into_iter()
            .map(|ladder| ladder.into_iter().map(str::to_string).collect())
            .collect()
    };

    output_result(
        "Shortest ladders",
        &LadderResult {
            from: args.from.clone(),
            to: args.to.clone(),
            length: ladders.first().map(Vec::len),
            ladders,
        },
        cli_args,
    )
}

/// Print dictionary, index and cache statistics.
fn show_stats(args: &StatsArgs, cli_args: &WordlinkArgs) -> Result<()> {
    let graph = open_graph(&args.graph)?;
    output_result("Word graph statistics", &graph_stats(&graph)?, cli_args)
}

/// Degree figures cover each distinct word once; repeated entries are skipped.
fn graph_stats(graph: &WordGraph) -> Result<GraphStats> {
    let dictionary = graph.dictionary();
    let cache = graph.cache();

    let degrees = cache
        .distinct_slots()
        .map(|slot| cache.degree(slot))
        .collect::<Result<Vec<usize>>>()?;
    let connected_words = degrees.iter().filter(|&&degree| degree > 0).count();
    let edges = cache.edge_count();

    Ok(GraphStats {
        dictionary_words: dictionary.len(),
        distinct_words: dictionary.distinct_len(),
        patterns: graph.index().len(),
        connected_words,
        isolated_words: degrees.len() - connected_words,
        edges,
        max_degree: degrees.iter().copied().max().unwrap_or(0),
        average_degree: if degrees.is_empty() {
            0.0
        } else {
            (2 * edges) as f64 / degrees.len() as f64
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_repeated_words_once() {
        let dict = Dictionary::from_words(["cat", "cot", "cat", "cog", "zebra", "cot"]).unwrap();
        let graph = WordGraph::from_dictionary(dict, &IndexConfig::sequential()).unwrap();

        let stats = graph_stats(&graph).unwrap();
        assert_eq!(stats.dictionary_words, 6);
        assert_eq!(stats.distinct_words, 4);
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.connected_words, 3);
        assert_eq!(stats.isolated_words, 1);
        assert_eq!(stats.max_degree, 2);
        assert!((stats.average_degree - 1.0).abs() < f64::EPSILON);
    }
}
