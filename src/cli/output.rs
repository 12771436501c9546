//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{CjkfuzzArgs, OutputFormat};
use crate::config::{MatchMode, ScorerKind};
use crate::error::Result;

/// Rendering of a command result for people rather than programs.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

/// Result structure for tokenizing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokenizer: String,
    pub tokens: Vec<Token>,
}

/// Result structure for the edit distance. `distance` is `None` when it
/// exceeds `max`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance: Option<usize>,
    pub max: Option<usize>,
}

/// Result structure for scoring two strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scorer: ScorerKind,
    pub mode: MatchMode,
    pub score: f64,
}

/// One ranked choice.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchEntry {
    pub rank: usize,
    pub index: usize,
    pub choice: String,
    pub score: f64,
}

/// Result structure for extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResults {
    pub query: String,
    pub matches: Vec<MatchEntry>,
    pub total_choices: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &CjkfuzzArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args, out),
    }
}

fn output_json<T: Serialize, W: Write>(result: &T, args: &CjkfuzzArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

impl HumanOutput for TokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for token in &self.tokens {
            writeln!(
                out,
                "{}\t{}\t{}..{}\t{:?}",
                token.position,
                quote(&token.text),
                token.start_offset,
                token.end_offset,
                token.token_type
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for DistanceResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        match (self.distance, self.max) {
            (Some(distance), _) => writeln!(out, "{distance}")?,
            (None, Some(max)) => writeln!(out, "exceeds {max}")?,
            (None, None) => {}
        }
        Ok(())
    }
}

impl HumanOutput for ScoreResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", format_score(self.score))?;
        Ok(())
    }
}

impl HumanOutput for ExtractResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if self.matches.is_empty() {
            writeln!(out, "No matches.")?;
            return Ok(());
        }

        for entry in &self.matches {
            writeln!(
                out,
                "{}. {}  {}  #{}",
                entry.rank,
                format_score(entry.score),
                entry.choice,
                entry.index
            )?;
        }
        Ok(())
    }
}

/// Format a score with four decimals.
fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// Quote token text so leading spaces and control characters stay visible.
fn quote(text: &str) -> String {
    format!("{text:?}")
}
