//! Levenshtein edit distance and ratio.
//!
//! Distances count single-symbol insertions, deletions and substitutions,
//! each with unit cost. The functions are generic over any comparable symbol
//! type, so the same code measures character edits on text and token edits
//! on tokenized text.

use std::cmp::min;

use crate::error::{FuzzError, Result};

/// Calculate the Levenshtein distance between two sequences.
///
/// Fills a `(|s2|+1) x (|s1|+1)` table whose first row and column hold the
/// distance from the empty prefix. Defined for empty input: the distance is
/// then the length of the other sequence.
///
/// # Examples
///
/// ```
/// use cjkfuzz::distance::levenshtein;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein::distance(&a, &b), 3);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn distance<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len1 + 1]; len2 + 1];

    // Initialize first row and column
    for j in 0..=len1 {
        matrix[0][j] = j;
    }
    for i in 0..=len2 {
        matrix[i][0] = i;
    }

    for i in 1..=len2 {
        for j in 1..=len1 {
            matrix[i][j] = if s1[j - 1] == s2[i - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        matrix[i][j - 1], // insertion
                        matrix[i - 1][j], // deletion
                    ),
                    matrix[i - 1][j - 1], // substitution
                )
            };
        }
    }

    matrix[len2][len1]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `None` if the distance exceeds `threshold`. Only two rows of the
/// table are kept alive.
#[allow(clippy::needless_range_loop)]
pub fn distance_within<T: PartialEq>(s1: &[T], s2: &[T], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return (len2 <= threshold).then_some(len2);
    }
    if len2 == 0 {
        return (len1 <= threshold).then_some(len1);
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Every later row is at least this row's minimum
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Calculate the Levenshtein ratio `(|s1| + |s2| - distance) / (|s1| + |s2|)`.
///
/// 1.0 means identical sequences. Disjoint sequences of equal length score
/// 0.5; 0.0 only occurs when one side is empty. The ratio is undefined for
/// two empty sequences and fails with
/// [`FuzzError::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use cjkfuzz::distance::levenshtein;
///
/// let a: Vec<char> = "中文測試".chars().collect();
/// assert_eq!(levenshtein::ratio(&a, &a).unwrap(), 1.0);
/// assert!(levenshtein::ratio::<char>(&[], &[]).is_err());
/// ```
pub fn ratio<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<f64> {
    let sum_len = s1.len() + s2.len();
    if sum_len == 0 {
        return Err(FuzzError::invalid_argument(
            "Levenshtein ratio is undefined for two empty sequences",
        ));
    }

    let distance = distance(s1, s2);
    Ok((sum_len - distance) as f64 / sum_len as f64)
}
