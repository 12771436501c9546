//! Similarity scores between 0 and 1 built on the distance algorithms.
//!
//! Every entry point takes pluggable hooks, injected at call time:
//!
//! - a [`Preprocessor`], applied identically to both inputs before scoring
//!   (for example transliterating Chinese characters to pinyin);
//! - a [`Scorer`], any function `(&[T], &[T]) -> Result<f64>` returning a
//!   value in `[0, 1]`. The default is [`levenshtein::ratio`].
//!
//! A scorer that returns a value outside `[0, 1]` is reported as
//! [`FuzzError::ContractViolation`] instead of being passed through.
//!
//! # Examples
//!
//! ```
//! use cjkfuzz::fuzz;
//!
//! assert_eq!(fuzz::ratio_str("中文測試", "中文測試").unwrap(), 1.0);
//! assert_eq!(fuzz::partial_ratio_str("test", "more tests").unwrap(), 1.0);
//! assert_eq!(fuzz::token_sort_ratio_str("token sort", "sort token").unwrap(), 1.0);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::distance::levenshtein;
use crate::error::{FuzzError, Result};

pub mod ratio;
pub mod token_sort;

pub use ratio::{partial_ratio, partial_ratio_str, ratio, ratio_str};
pub use token_sort::{TokenSortOptions, token_sort_ratio, token_sort_ratio_str};

/// A similarity function over two symbol sequences.
///
/// Implemented for every `Fn(&[T], &[T]) -> Result<f64> + Send + Sync`, so
/// plain functions such as [`levenshtein::ratio`] and closures can be used
/// directly.
pub trait Scorer<T>: Send + Sync {
    /// Score two sequences; the value must lie in `[0, 1]`.
    fn score(&self, s1: &[T], s2: &[T]) -> Result<f64>;
}

impl<T, F> Scorer<T> for F
where
    F: Fn(&[T], &[T]) -> Result<f64> + Send + Sync,
{
    fn score(&self, s1: &[T], s2: &[T]) -> Result<f64> {
        self(s1, s2)
    }
}

/// A transformation applied to both inputs before they are scored.
pub trait Preprocessor<T>: Send + Sync {
    fn preprocess(&self, sequence: &[T]) -> Vec<T>;
}

impl<T, F> Preprocessor<T> for F
where
    F: Fn(&[T]) -> Vec<T> + Send + Sync,
{
    fn preprocess(&self, sequence: &[T]) -> Vec<T> {
        self(sequence)
    }
}

/// Hooks used by [`ratio`] and [`partial_ratio`].
pub struct FuzzOptions<T> {
    /// Optional preprocessing applied to both inputs.
    pub preprocess: Option<Arc<dyn Preprocessor<T>>>,
    /// The similarity function.
    pub scorer: Arc<dyn Scorer<T>>,
}

impl<T: PartialEq + 'static> FuzzOptions<T> {
    /// Levenshtein ratio, no preprocessing.
    pub fn new() -> Self {
        FuzzOptions {
            preprocess: None,
            scorer: Arc::new(levenshtein::ratio::<T>),
        }
    }
}

impl<T> FuzzOptions<T> {
    /// Replace the scorer.
    pub fn with_scorer<S>(mut self, scorer: S) -> Self
    where
        S: Scorer<T> + 'static,
    {
        self.scorer = Arc::new(scorer);
        self
    }

    /// Set the preprocessing hook.
    pub fn with_preprocess<P>(mut self, preprocess: P) -> Self
    where
        P: Preprocessor<T> + 'static,
    {
        self.preprocess = Some(Arc::new(preprocess));
        self
    }
}

impl<T: PartialEq + 'static> Default for FuzzOptions<T> {
    fn default() -> Self {
        FuzzOptions::new()
    }
}

impl<T> Clone for FuzzOptions<T> {
    fn clone(&self) -> Self {
        FuzzOptions {
            preprocess: self.preprocess.clone(),
            scorer: Arc::clone(&self.scorer),
        }
    }
}

impl<T> fmt::Debug for FuzzOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzOptions")
            .field("preprocess", &self.preprocess.is_some())
            .finish_non_exhaustive()
    }
}

/// Reject scores outside `[0, 1]`, NaN included.
pub(crate) fn check_score(score: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(FuzzError::contract_violation(format!(
            "scorer must return a value between 0 and 1, got {score}"
        )))
    }
}

/// Run `f` on the inputs, preprocessed when a hook is given.
pub(crate) fn with_preprocessed<T, R>(
    s1: &[T],
    s2: &[T],
    preprocess: Option<&dyn Preprocessor<T>>,
    f: impl FnOnce(&[T], &[T]) -> R,
) -> R {
    match preprocess {
        Some(preprocess) => f(&preprocess.preprocess(s1), &preprocess.preprocess(s2)),
        None => f(s1, s2),
    }
}

/// Unwrap a required input, failing with [`FuzzError::InvalidArgument`].
pub(crate) fn required<'a, S: ?Sized>(input: Option<&'a S>, name: &str) -> Result<&'a S> {
    input.ok_or_else(|| FuzzError::invalid_argument(format!("{name} must be present")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::jaro;
    use crate::sequence::symbols;

    #[test]
    fn test_check_score() {
        assert_eq!(check_score(0.0).unwrap(), 0.0);
        assert_eq!(check_score(1.0).unwrap(), 1.0);
        for bad in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_score(bad),
                Err(FuzzError::ContractViolation(_))
            ));
        }
    }

    #[test]
    fn test_functions_and_closures_are_scorers() {
        let a = symbols("abc");
        let by_fn: &dyn Scorer<char> = &jaro::similarity::<char>;
        assert_eq!(by_fn.score(&a, &a).unwrap(), 1.0);

        let constant = |_: &[char], _: &[char]| -> Result<f64> { Ok(0.25) };
        assert_eq!(constant.score(&a, &a).unwrap(), 0.25);
    }

    #[test]
    fn test_options_builder() {
        let options = FuzzOptions::<char>::new()
            .with_scorer(jaro::similarity::<char>)
            .with_preprocess(|s: &[char]| s.to_vec());
        assert!(options.preprocess.is_some());
        assert!(format!("{options:?}").contains("preprocess: true"));

        let cloned = options.clone();
        assert!(Arc::ptr_eq(&cloned.scorer, &options.scorer));
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some("x"), "s1").unwrap(), "x");
        assert!(matches!(
            required::<str>(None, "s1"),
            Err(FuzzError::InvalidArgument(_))
        ));
    }
}
