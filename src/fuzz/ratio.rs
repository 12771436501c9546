//! Whole-sequence and best-substring ratios.

use log::trace;

use crate::error::Result;
use crate::fuzz::{FuzzOptions, check_score, required, with_preprocessed};
use crate::sequence::symbols;

/// Score two whole sequences.
///
/// Fails with [`InvalidArgument`](crate::error::FuzzError::InvalidArgument)
/// if either input is absent and with
/// [`ContractViolation`](crate::error::FuzzError::ContractViolation) if the
/// scorer returns a value outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use cjkfuzz::fuzz::{self, FuzzOptions};
/// use cjkfuzz::sequence::symbols;
///
/// let a = symbols("中文測試");
/// let b = symbols("英文測試");
/// let score = fuzz::ratio(Some(&a[..]), Some(&b[..]), &FuzzOptions::new()).unwrap();
/// assert_eq!(score, 0.875);
/// ```
pub fn ratio<T>(s1: Option<&[T]>, s2: Option<&[T]>, options: &FuzzOptions<T>) -> Result<f64> {
    let s1 = required(s1, "s1")?;
    let s2 = required(s2, "s2")?;

    with_preprocessed(s1, s2, options.preprocess.as_deref(), |s1, s2| {
        check_score(options.scorer.score(s1, s2)?)
    })
}

/// Score the shorter sequence against its best-matching window of the
/// longer one.
///
/// The shorter sequence slides across the longer one at every offset
/// `0..=(longer - shorter)` and the highest window score is returned; equal
/// lengths degenerate to [`ratio`]. Each window costs a full scorer call, so
/// the total work grows with the length difference times the scorer cost.
pub fn partial_ratio<T>(
    s1: Option<&[T]>,
    s2: Option<&[T]>,
    options: &FuzzOptions<T>,
) -> Result<f64> {
    let s1 = required(s1, "s1")?;
    let s2 = required(s2, "s2")?;

    with_preprocessed(s1, s2, options.preprocess.as_deref(), |s1, s2| {
        let (shorter, longer) = if s1.len() > s2.len() {
            (s2, s1)
        } else {
            (s1, s2)
        };
        let width = shorter.len();

        let mut best = 0.0;
        for offset in 0..=(longer.len() - width) {
            let window = &longer[offset..offset + width];
            let score = check_score(options.scorer.score(shorter, window)?)?;
            trace!("partial_ratio window {offset}: {score}");
            if score > best {
                best = score;
            }
        }
        Ok(best)
    })
}

/// [`ratio`] over the characters of two strings with default options.
pub fn ratio_str(s1: &str, s2: &str) -> Result<f64> {
    let (a, b) = (symbols(s1), symbols(s2));
    ratio(Some(&a[..]), Some(&b[..]), &FuzzOptions::new())
}

/// [`partial_ratio`] over the characters of two strings with default options.
pub fn partial_ratio_str(s1: &str, s2: &str) -> Result<f64> {
    let (a, b) = (symbols(s1), symbols(s2));
    partial_ratio(Some(&a[..]), Some(&b[..]), &FuzzOptions::new())
}
