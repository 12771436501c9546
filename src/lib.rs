//! # cjkfuzz
//!
//! Fuzzy string matching for CJK and mixed-script text.
//!
//! ## Features
//!
//! - Levenshtein, Jaro and Jaro-Winkler over any comparable symbol type
//! - Script-aware tokenization: one token per CJK ideograph or kana,
//!   space-delimited runs for everything else
//! - Whole, partial and token-sort ratios with pluggable preprocessing,
//!   scorer and tokenizer hooks
//! - Bounded top-k extraction, sequential or on the rayon thread pool
//!
//! ## Example
//!
//! ```
//! use cjkfuzz::distance::levenshtein;
//! use cjkfuzz::{fuzz, process, tokenize};
//!
//! assert_eq!(
//!     tokenize("中文測試Chinese Test"),
//!     ["中", "文", "測", "試", "Chinese", "Test"]
//! );
//! assert_eq!(fuzz::partial_ratio_str("test", "more tests").unwrap(), 1.0);
//!
//! let choices = ["apple", "banana", "orange", "pear"];
//! let best = process::extract_text("banana", &choices, 1, &levenshtein::ratio::<char>).unwrap();
//! assert_eq!(*best[0].choice, "banana");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod distance;
pub mod error;
pub mod fuzz;
pub mod process;
pub mod sequence;

pub use analysis::tokenize;
pub use config::FuzzConfig;
pub use error::{FuzzError, Result};

pub mod prelude {
    pub use crate::analysis::{Token, Tokenizer};
    pub use crate::config::{FuzzConfig, MatchMode, ScorerKind, TokenizerKind};
    pub use crate::distance::{jaro, jaro_winkler, levenshtein};
    pub use crate::error::{FuzzError, Result};
    pub use crate::fuzz::{FuzzOptions, Preprocessor, Scorer, TokenSortOptions};
    pub use crate::process::{ExtractedMatch, TopK};
    pub use crate::sequence::symbols;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
