//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on any Unicode whitespace.
///
/// Unlike [`DenseScriptTokenizer`](super::DenseScriptTokenizer) it treats
/// tabs, newlines and U+3000 as separators and never splits dense-script
/// runs.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    fn segment(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (offset, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(begin)) => {
                    tokens.push(Token::with_offsets(&text[begin..offset], tokens.len(), begin, offset));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }
        if let Some(begin) = start {
            tokens.push(Token::with_offsets(&text[begin..], tokens.len(), begin, text.len()));
        }

        tokens
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(Self::segment(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
