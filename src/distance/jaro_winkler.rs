//! Jaro-Winkler similarity.
//!
//! Boosts the Jaro similarity of sequences sharing a common prefix:
//! `jaro + prefix_len * prefix_weight * (1 - jaro)`, with the prefix capped
//! at [`MAX_PREFIX_LEN`] symbols. With `prefix_weight <= 0.25` the result
//! stays within `[0, 1]`.

use crate::distance::{common_prefix_len, jaro};
use crate::error::{FuzzError, Result};

/// Standard Winkler scaling factor.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Largest accepted prefix weight.
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

/// Longest prefix that earns a bonus.
pub const MAX_PREFIX_LEN: usize = 4;

/// Calculate the Jaro-Winkler similarity between two sequences.
///
/// Fails with [`FuzzError::InvalidArgument`] if `prefix_weight` lies outside
/// `[0, 0.25]`, and with [`FuzzError::Domain`] if either sequence is empty.
/// The common prefix is measured on the sequences exactly as given.
///
/// # Examples
///
/// ```
/// use cjkfuzz::distance::{jaro, jaro_winkler};
///
/// let a: Vec<char> = "user_id".chars().collect();
/// let b: Vec<char> = "user_name".chars().collect();
/// let jw = jaro_winkler::similarity(&a, &b, 0.1).unwrap();
/// assert!(jw >= jaro::similarity(&a, &b).unwrap());
/// ```
pub fn similarity<T: PartialEq>(s1: &[T], s2: &[T], prefix_weight: f64) -> Result<f64> {
    if !(0.0..=MAX_PREFIX_WEIGHT).contains(&prefix_weight) {
        return Err(FuzzError::invalid_argument(format!(
            "prefix weight must be between 0 and {MAX_PREFIX_WEIGHT}, got {prefix_weight}"
        )));
    }

    let sim = jaro::similarity(s1, s2)?;
    let prefix_len = common_prefix_len(s1, s2).min(MAX_PREFIX_LEN);
    Ok(sim + prefix_len as f64 * prefix_weight * (1.0 - sim))
}

/// Jaro-Winkler similarity with [`DEFAULT_PREFIX_WEIGHT`].
pub fn similarity_default<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<f64> {
    similarity(s1, s2, DEFAULT_PREFIX_WEIGHT)
}
