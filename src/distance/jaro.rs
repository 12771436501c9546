//! Jaro similarity.
//!
//! Symbols of `s1` are matched greedily, leftmost first, against unmatched
//! symbols of `s2` lying inside a window around the same index. Matched
//! symbols that appear in a different relative order count as
//! transpositions. The score is
//!
//! ```text
//! (m / |s1| + m / |s2| + (m - t / 2) / m) / 3
//! ```
//!
//! where `m` is the number of matches and `t` the number of transpositions.

use crate::error::{FuzzError, Result};

/// Half-width of the match window for sequences of the given lengths.
///
/// `max(len1, len2) / 2 - 1`, floored at zero so that single-symbol
/// sequences can still match at the same index.
pub fn match_window(len1: usize, len2: usize) -> usize {
    (len1.max(len2) / 2).saturating_sub(1)
}

/// Calculate the Jaro similarity between two sequences.
///
/// Fails with [`FuzzError::Domain`] if either sequence is empty.
///
/// # Examples
///
/// ```
/// use cjkfuzz::distance::jaro;
///
/// let a: Vec<char> = "MARTHA".chars().collect();
/// let b: Vec<char> = "MARHTA".chars().collect();
/// let sim = jaro::similarity(&a, &b).unwrap();
/// assert!((sim - 0.9444).abs() < 1e-4);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn similarity<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<f64> {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 || len2 == 0 {
        return Err(FuzzError::domain(
            "Jaro similarity is undefined for sequences of zero length",
        ));
    }

    let window = match_window(len1, len2);

    let mut s1_matches = vec![false; len1];
    let mut s2_matches = vec![false; len2];
    let mut matches = 0usize;

    for i in 0..len1 {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len2);

        for j in start..end {
            if s2_matches[j] || s1[i] != s2[j] {
                continue;
            }
            s1_matches[i] = true;
            s2_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return Ok(0.0);
    }

    let mut transpositions = 0usize;
    let mut k = 0;
    for i in 0..len1 {
        if !s1_matches[i] {
            continue;
        }
        while !s2_matches[k] {
            k += 1;
        }
        if s1[i] != s2[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    Ok((m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0)
}
