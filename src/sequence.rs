//! Conversions from text to symbol sequences.
//!
//! Every algorithm in this crate compares slices of symbols. For text the
//! natural symbol is a `char`; callers who want user-perceived characters
//! (a base letter plus its combining marks) can use grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into Unicode scalar values.
pub fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Split `text` into extended grapheme clusters.
pub fn graphemes(text: &str) -> Vec<String> {
    text.graphemes(true).map(str::to_owned).collect()
}
