//! Dense-script symbol classification.
//!
//! A "dense" script is one where every symbol is a token of its own
//! (CJK ideographs, kana, ...). Membership is decided by a static table of
//! inclusive code-point ranges; callers may extend the table but never
//! change how it is consulted.

use serde::{Deserialize, Serialize};

/// An inclusive range of Unicode code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRange {
    pub from: u32,
    pub to: u32,
}

impl CodePointRange {
    pub const fn new(from: u32, to: u32) -> Self {
        CodePointRange { from, to }
    }

    /// Whether `ch` falls within this range.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        (self.from..=self.to).contains(&(ch as u32))
    }
}

/// Built-in dense-script ranges.
pub const DENSE_SCRIPT_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x3300, 0x33FF),   // compatibility ideographs
    CodePointRange::new(0xFE30, 0xFE4F),   // compatibility ideographs
    CodePointRange::new(0xF900, 0xFAFF),   // compatibility ideographs
    CodePointRange::new(0x2F800, 0x2FA1F), // compatibility ideographs supplement
    CodePointRange::new(0x3040, 0x309F),   // Hiragana
    CodePointRange::new(0x30A0, 0x30FF),   // Katakana
    CodePointRange::new(0x2E80, 0x2EFF),   // CJK radicals supplement
    CodePointRange::new(0x4E00, 0x9FFF),   // CJK unified ideographs
    CodePointRange::new(0x3400, 0x4DBF),   // extension A
    CodePointRange::new(0x20000, 0x2A6DF), // extension B
    CodePointRange::new(0x2A700, 0x2B73F), // extension C
    CodePointRange::new(0x2B740, 0x2B81F), // extension D
    CodePointRange::new(0x2B820, 0x2CEAF), // extension E
];

/// Predicate deciding whether a symbol belongs to a dense script.
pub trait SymbolClassifier: Send + Sync {
    fn is_dense_script(&self, ch: char) -> bool;
}

/// Table-driven classifier over [`DENSE_SCRIPT_RANGES`] plus any extra
/// ranges supplied by configuration.
#[derive(Clone, Debug, Default)]
pub struct DenseScriptClassifier {
    extra_ranges: Vec<CodePointRange>,
}

impl DenseScriptClassifier {
    /// Create a classifier over the built-in table.
    pub fn new() -> Self {
        DenseScriptClassifier::default()
    }

    /// Append extra ranges to the built-in table.
    pub fn with_extra_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        self.extra_ranges.extend(ranges);
        self
    }

    /// All ranges consulted by this classifier, built-in first.
    pub fn ranges(&self) -> impl Iterator<Item = &CodePointRange> {
        DENSE_SCRIPT_RANGES.iter().chain(self.extra_ranges.iter())
    }
}

impl SymbolClassifier for DenseScriptClassifier {
    fn is_dense_script(&self, ch: char) -> bool {
        self.ranges().any(|range| range.contains(ch))
    }
}

/// Check `ch` against the built-in dense-script table.
pub fn is_dense_script(ch: char) -> bool {
    DENSE_SCRIPT_RANGES.iter().any(|range| range.contains(ch))
}
