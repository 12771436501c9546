//! Symbol match counting.

use crate::error::{FuzzError, Result};

/// For each symbol of `s1`, count its occurrences in `s2`, and sum.
pub fn count<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    s1.iter()
        .map(|symbol| s2.iter().filter(|other| *other == symbol).count())
        .sum()
}

/// [`count`] divided by the longer sequence length.
///
/// Repeated symbols can push the count above the longer length, so the
/// value is only guaranteed to be in `[0, 1]` for sequences without repeats.
/// Fails with [`FuzzError::InvalidArgument`] when both sequences are empty.
pub fn ratio<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<f64> {
    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return Err(FuzzError::invalid_argument(
            "match ratio is undefined for two empty sequences",
        ));
    }
    Ok(count(s1, s2) as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::symbols;

    #[test]
    fn test_match_count() {
        let a = symbols("中文測試");
        assert_eq!(count(&a, &a), 4);
        assert_eq!(count(&symbols("aa"), &symbols("a")), 2);
        assert_eq!(count(&symbols("abc"), &symbols("xyz")), 0);
    }

    #[test]
    fn test_match_ratio() {
        let ratio = ratio(&symbols("中文測試"), &symbols("測試中文")).unwrap();
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_match_ratio_both_empty() {
        assert!(ratio::<char>(&[], &[]).is_err());
        assert_eq!(super::ratio(&symbols("ab"), &[]).unwrap(), 0.0);
    }
}
