//! Command line argument parsing for the cjkfuzz CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{FuzzConfig, MatchMode, ScorerKind, TokenizerKind};

/// cjkfuzz - Fuzzy string matching for mixed CJK and Latin text
#[derive(Parser, Debug, Clone)]
#[command(name = "cjkfuzz")]
#[command(about = "Fuzzy string matching for mixed CJK and Latin text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CjkfuzzArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CJKFUZZ_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CjkfuzzArgs {
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
    /// Split text into tokens
    Tokenize(TokenizeArgs),

    /// Levenshtein distance between two strings
    Distance(DistanceArgs),

    /// Similarity score between two strings
    Score(ScoreArgs),

    /// Best-matching choices for a query
    Extract(ExtractArgs),
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Tokenizer to use
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,
}

/// Arguments for the edit distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "S1")]
    pub s1: String,

    #[arg(value_name = "S2")]
    pub s2: String,

    /// Stop once the distance exceeds this value
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,
}

/// Scoring options shared by `score` and `extract`; each one overrides the
/// configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Similarity function
    #[arg(short, long)]
    pub scorer: Option<ScorerKind>,

    /// Comparison mode
    #[arg(short, long)]
    pub mode: Option<MatchMode>,

    /// Tokenizer for token-sort mode
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Jaro-Winkler prefix weight (0 to 0.25)
    #[arg(short, long, value_name = "P")]
    pub prefix_weight: Option<f64>,
}

impl MatchArgs {
    /// Apply the given options on top of `config`.
    pub fn apply(&self, config: &mut FuzzConfig) {
        if let Some(scorer) = self.scorer {
            config.scorer = scorer;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer = tokenizer;
        }
        if let Some(prefix_weight) = self.prefix_weight {
            config.prefix_weight = prefix_weight;
        }
    }
}

/// Arguments for scoring two strings
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(value_name = "S1")]
    pub s1: String,

    #[arg(value_name = "S2")]
    pub s2: String,

    #[command(flatten)]
    pub matching: MatchArgs,
}

/// Arguments for extracting the best choices
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// File with one choice per line (default: stdin)
    #[arg(long, value_name = "FILE")]
    pub choices: Option<PathBuf>,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Score choices in parallel
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub matching: MatchArgs,
}

impl ExtractArgs {
    /// Apply the given options on top of `config`.
    pub fn apply(&self, config: &mut FuzzConfig) {
        self.matching.apply(config);
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if self.parallel {
            config.parallel = true;
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
