//! Ranking candidates against a query.

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{FuzzError, Result};
use crate::fuzz::{Scorer, check_score};
use crate::process::top_k::TopK;
use crate::sequence::symbols;

/// One candidate returned by an extraction.
#[derive(Debug, PartialEq)]
pub struct ExtractedMatch<'a, C> {
    /// Score of the candidate against the query.
    pub score: f64,
    /// The candidate itself.
    pub choice: &'a C,
    /// Position of the candidate in the input collection.
    pub index: usize,
}

impl<C> Clone for ExtractedMatch<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ExtractedMatch<'_, C> {}

/// Tie-break key: candidate value first, input position second.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Ranked<'a, C> {
    choice: &'a C,
    index: usize,
}

impl<C> Clone for Ranked<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Ranked<'_, C> {}

/// Rank `choices` by `score` and return the best `limit`, best first.
///
/// Equal scores rank by the candidate value (greater first), then by input
/// position (later first). Fails with
/// [`InvalidArgument`](crate::error::FuzzError::InvalidArgument) when
/// `limit` is zero. The first scoring error aborts the extraction, as does a
/// score outside `[0, 1]`.
pub fn extract_by<'a, C, F>(
    choices: &'a [C],
    limit: usize,
    mut score: F,
) -> Result<Vec<ExtractedMatch<'a, C>>>
where
    C: Ord,
    F: FnMut(&C) -> Result<f64>,
{
    let mut top = TopK::new(limit)?;
    for (index, choice) in choices.iter().enumerate() {
        let score = check_score(score(choice)?)?;
        trace!("extract candidate {index}: {score}");
        top.push(score, Ranked { choice, index });
    }
    debug!(
        "extracted {} of {} candidates (limit {limit})",
        top.len(),
        choices.len()
    );

    Ok(into_matches(top))
}

/// Parallel [`extract_by`].
///
/// Each rayon worker keeps its own [`TopK`] and the partial selections are
/// merged, so the result is the same list [`extract_by`] returns. When
/// several candidates fail to score, which error is reported is unspecified.
pub fn extract_par<'a, C, F>(
    choices: &'a [C],
    limit: usize,
    score: F,
) -> Result<Vec<ExtractedMatch<'a, C>>>
where
    C: Ord + Sync,
    F: Fn(&C) -> Result<f64> + Sync,
{
    let empty = TopK::new(limit)?;
    let top = choices
        .par_iter()
        .enumerate()
        .try_fold(
            || empty.clone(),
            |mut top, (index, choice)| {
                let score = check_score(score(choice)?)?;
                top.push(score, Ranked { choice, index });
                Ok::<_, FuzzError>(top)
            },
        )
        .try_reduce(
            || empty.clone(),
            |mut left, right| {
                left.merge(right);
                Ok::<_, FuzzError>(left)
            },
        )?;
    debug!(
        "extracted {} of {} candidates in parallel (limit {limit})",
        top.len(),
        choices.len()
    );

    Ok(into_matches(top))
}

/// Rank symbol sequences against `query` with `scorer`.
///
/// # Examples
///
/// ```
/// use cjkfuzz::distance::levenshtein;
/// use cjkfuzz::process;
///
/// let query: Vec<char> = "banana".chars().collect();
/// let choices: Vec<Vec<char>> = ["apple", "banana", "orange", "pear"]
///     .iter()
///     .map(|c| c.chars().collect())
///     .collect();
///
/// let best = process::extract(&query, &choices, 2, &levenshtein::ratio::<char>).unwrap();
/// assert_eq!(best[0].score, 1.0);
/// assert_eq!(best[1].index, 2);
/// ```
pub fn extract<'a, T, C>(
    query: &[T],
    choices: &'a [C],
    limit: usize,
    scorer: &dyn Scorer<T>,
) -> Result<Vec<ExtractedMatch<'a, C>>>
where
    C: AsRef<[T]> + Ord,
{
    extract_by(choices, limit, |choice| scorer.score(query, choice.as_ref()))
}

/// Rank strings against `query`, comparing their characters with `scorer`.
pub fn extract_text<'a, S>(
    query: &str,
    choices: &'a [S],
    limit: usize,
    scorer: &dyn Scorer<char>,
) -> Result<Vec<ExtractedMatch<'a, S>>>
where
    S: AsRef<str> + Ord,
{
    let query = symbols(query);
    extract_by(choices, limit, |choice| {
        scorer.score(&query, &symbols(choice.as_ref()))
    })
}

fn into_matches<'a, C: Ord>(top: TopK<Ranked<'a, C>>) -> Vec<ExtractedMatch<'a, C>> {
    top.into_sorted_vec()
        .into_iter()
        .map(|(score, ranked)| ExtractedMatch {
            score,
            choice: ranked.choice,
            index: ranked.index,
        })
        .collect()
}
