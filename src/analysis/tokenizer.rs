//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split text into the units compared by
//! [`token_sort_ratio`](crate::fuzz::token_sort_ratio).
//!
//! # Available Tokenizers
//!
//! - [`dense_script::DenseScriptTokenizer`] - One token per CJK/kana symbol,
//!   space-delimited runs for everything else (the default)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on any whitespace
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use cjkfuzz::analysis::tokenizer::Tokenizer;
//! use cjkfuzz::analysis::tokenizer::DenseScriptTokenizer;
//!
//! let tokenizer = DenseScriptTokenizer::new();
//! let tokens: Vec<String> = tokenizer
//!     .tokenize("中文測試Chinese Test")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, ["中", "文", "測", "試", "Chinese", "Test"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared behind an
/// `Arc` by scorers running on several threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod dense_script;
pub mod unicode_word;
pub mod whitespace;

pub use dense_script::DenseScriptTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Tokenize `text` with the default [`DenseScriptTokenizer`] and return the
/// token texts in order.
pub fn tokenize(text: &str) -> Vec<String> {
    DenseScriptTokenizer::new()
        .segment(text)
        .into_iter()
        .map(|token| token.text)
        .collect()
}
