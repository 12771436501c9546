//! Command implementations for the cjkfuzz CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FuzzConfig;
use crate::distance::levenshtein;
use crate::error::Result;
use crate::process::{extract_by, extract_par};
use crate::sequence::symbols;

/// Execute a CLI command, writing its result to stdout.
pub fn execute_command(args: CjkfuzzArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)
}

/// Execute a CLI command, writing its result to `out`.
pub fn run_command<W: Write>(args: &CjkfuzzArgs, out: &mut W) -> Result<()> {
    let config = load_config(args)?;
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, config, args, out),
        Command::Distance(distance_args) => edit_distance(distance_args, args, out),
        Command::Score(score_args) => score_pair(score_args, config, args, out),
        Command::Extract(extract_args) => extract_choices(extract_args, config, args, out),
    }
}

/// Load the configuration file if one was given.
fn load_config(args: &CjkfuzzArgs) -> Result<FuzzConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            FuzzConfig::from_file(path)
        }
        None => Ok(FuzzConfig::default()),
    }
}

/// Split text into tokens.
fn tokenize_text<W: Write>(
    args: &TokenizeArgs,
    config: FuzzConfig,
    cli_args: &CjkfuzzArgs,
    out: &mut W,
) -> Result<()> {
    let kind = args.tokenizer.unwrap_or(config.tokenizer);
    let tokenizer = kind.build(&config.dense_ranges);
    let tokens: Vec<_> = tokenizer.tokenize(&args.text)?.collect();
    debug!("{} produced {} tokens", tokenizer.name(), tokens.len());

    output_result(
        &TokenizeResult {
            tokenizer: tokenizer.name().to_string(),
            tokens,
        },
        cli_args,
        out,
    )
}

/// Levenshtein distance over characters.
fn edit_distance<W: Write>(args: &DistanceArgs, cli_args: &CjkfuzzArgs, out: &mut W) -> Result<()> {
    let s1 = symbols(&args.s1);
    let s2 = symbols(&args.s2);
    let distance = match args.max {
        Some(max) => levenshtein::distance_within(&s1, &s2, max),
        None => Some(levenshtein::distance(&s1, &s2)),
    };

    output_result(
        &DistanceResult {
            distance,
            max: args.max,
        },
        cli_args,
        out,
    )
}

/// Score two strings.
fn score_pair<W: Write>(
    args: &ScoreArgs,
    mut config: FuzzConfig,
    cli_args: &CjkfuzzArgs,
    out: &mut W,
) -> Result<()> {
    args.matching.apply(&mut config);
    config.validate()?;

    let score = config.matcher().score(&args.s1, &args.s2)?;

    output_result(
        &ScoreResult {
            scorer: config.scorer,
            mode: config.mode,
            score,
        },
        cli_args,
        out,
    )
}

/// Rank choices against a query.
fn extract_choices<W: Write>(
    args: &ExtractArgs,
    mut config: FuzzConfig,
    cli_args: &CjkfuzzArgs,
    out: &mut W,
) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let choices = match &args.choices {
        Some(path) => read_choices_file(path)?,
        None => read_choices(io::stdin().lock())?,
    };
    info!(
        "Scoring {} choices with {:?}/{:?}",
        choices.len(),
        config.scorer,
        config.mode
    );

    let start_time = Instant::now();
    let matcher = config.matcher();
    let score = |choice: &String| matcher.score(&args.query, choice);
    let matches = if config.parallel {
        extract_par(&choices, config.limit, score)?
    } else {
        extract_by(&choices, config.limit, score)?
    };
    let duration = start_time.elapsed();

    let matches = matches
        .into_iter()
        .enumerate()
        .map(|(rank, m)| MatchEntry {
            rank: rank + 1,
            index: m.index,
            choice: m.choice.clone(),
            score: m.score,
        })
        .collect();

    output_result(
        &ExtractResults {
            query: args.query.clone(),
            matches,
            total_choices: choices.len(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
        out,
    )
}

fn read_choices_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open choices file {}", path.display()))?;
    read_choices(BufReader::new(file))
}

/// One choice per line; blank lines are skipped.
fn read_choices<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut choices = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            choices.push(line);
        }
    }
    Ok(choices)
}
