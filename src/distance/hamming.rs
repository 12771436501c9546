//! Hamming distance.

use crate::error::{FuzzError, Result};

/// Count the positions at which two equal-length sequences differ.
///
/// Fails with [`FuzzError::Domain`] when the lengths differ.
pub fn distance<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<usize> {
    if s1.len() != s2.len() {
        return Err(FuzzError::domain(format!(
            "Hamming distance is undefined for sequences of unequal length ({} vs {})",
            s1.len(),
            s2.len()
        )));
    }
    Ok(s1.iter().zip(s2).filter(|(a, b)| a != b).count())
}
