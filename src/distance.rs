//! Sequence distance and similarity algorithms.
//!
//! All functions operate on slices of any comparable symbol type: `char`s
//! for text, grapheme clusters, or whole tokens.
//!
//! - [`levenshtein`] - edit distance and ratio
//! - [`jaro`] / [`jaro_winkler`] - alignment-based similarity
//! - [`hamming`], [`jaccard`], [`matching`] - simple positional and set metrics

pub mod hamming;
pub mod jaccard;
pub mod jaro;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod matching;

/// Number of leading symbols shared by both sequences.
pub fn common_prefix_len<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    s1.iter().zip(s2).take_while(|(a, b)| a == b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(b"abcd", b"abxd"), 2);
        assert_eq!(common_prefix_len(b"abc", b"abcdef"), 3);
        assert_eq!(common_prefix_len::<u8>(b"", b"abc"), 0);
        assert_eq!(common_prefix_len(b"xyz", b"abc"), 0);
    }
}
