//! Jaccard index and distance over symbol sets.
//!
//! Sequences are reduced to the sets of distinct symbols they contain;
//! order and multiplicity are ignored.

use std::hash::Hash;

use ahash::AHashSet;

use crate::error::{FuzzError, Result};

fn symbol_sets<'a, T: Eq + Hash>(s1: &'a [T], s2: &'a [T]) -> (AHashSet<&'a T>, AHashSet<&'a T>) {
    (s1.iter().collect(), s2.iter().collect())
}

/// Calculate the Jaccard index `|A ∩ B| / |A ∪ B|`.
///
/// Fails with [`FuzzError::InvalidArgument`] when both sequences are empty.
pub fn index<T: Eq + Hash>(s1: &[T], s2: &[T]) -> Result<f64> {
    let (a, b) = symbol_sets(s1, s2);
    let union = a.union(&b).count();
    if union == 0 {
        return Err(FuzzError::invalid_argument(
            "Jaccard index is undefined for two empty sequences",
        ));
    }
    let intersection = a.intersection(&b).count();
    Ok(intersection as f64 / union as f64)
}

/// Number of symbols present in exactly one of the two sequences,
/// `|A ∪ B| - |A ∩ B|`.
pub fn distance<T: Eq + Hash>(s1: &[T], s2: &[T]) -> usize {
    let (a, b) = symbol_sets(s1, s2);
    a.symmetric_difference(&b).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::symbols;

    #[test]
    fn test_jaccard_identical() {
        let a = symbols("中文測試");
        assert_eq!(index(&a, &a).unwrap(), 1.0);
        assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = symbols("中文測試");
        let b = symbols("英文測驗");
        // common: 文 測, union: 中 文 測 試 英 驗
        assert!((index(&a, &b).unwrap() - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(distance(&a, &b), 4);
    }

    #[test]
    fn test_jaccard_ignores_order_and_repeats() {
        assert_eq!(index(&symbols("aab"), &symbols("ba")).unwrap(), 1.0);
    }

    #[test]
    fn test_jaccard_both_empty() {
        assert!(matches!(
            index::<char>(&[], &[]),
            Err(FuzzError::InvalidArgument(_))
        ));
        assert_eq!(distance::<char>(&[], &[]), 0);
        assert_eq!(index(&symbols("a"), &[]).unwrap(), 0.0);
    }
}
