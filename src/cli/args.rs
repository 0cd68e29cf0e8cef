//! Command line argument parsing for the Wordlink CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordlink - one-edit word adjacency over a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "wordlink")]
#[command(about = "Find words exactly one edit apart in a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordlinkArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordlinkArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the neighbors of one or more words
    Neighbors(NeighborsArgs),

    /// Check whether two words are one edit apart
    Check(CheckArgs),

    /// Build the pattern index for a dictionary and save it
    #[command(name = "build-index")]
    BuildIndex(BuildIndexArgs),

    /// Find every shortest word ladder between two words
    Ladder(LadderArgs),

    /// Show dictionary and index statistics
    Stats(StatsArgs),
}

/// Where the word graph comes from
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Dictionary file with one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Reuse a saved pattern index instead of building one
    #[arg(long, value_name = "INDEX_FILE")]
    pub index: Option<PathBuf>,

    /// Index configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for neighbor queries
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Arguments for adjacency checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// First word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Second word
    #[arg(value_name = "WORD2")]
    pub word2: String,
}

/// Arguments for building and saving a pattern index
#[derive(Parser, Debug, Clone)]
pub struct BuildIndexArgs {
    /// Dictionary file with one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Output file for the pattern index
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Index configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for ladder search
#[derive(Parser, Debug, Clone)]
pub struct LadderArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start word
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target word
    #[arg(value_name = "TO")]
    pub to: String,

    /// Compare words directly instead of using the pattern index
    #[arg(long)]
    pub linear: bool,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
