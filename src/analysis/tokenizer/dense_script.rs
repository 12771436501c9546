//! Script-aware tokenizer for mixed CJK/Latin text.
//!
//! Every dense-script symbol (see [`crate::analysis::script`]) becomes a
//! token of its own. Everything else accumulates in a buffer that is closed
//! by a U+0020 space, by a dense-script symbol, or by the end of input.
//!
//! Only U+0020 separates tokens. Tabs, newlines and the ideographic space
//! U+3000 are ordinary buffer content, and a space seen while the buffer is
//! empty (leading, doubled, or right after a dense symbol) is kept as the
//! first symbol of the next token rather than dropped. No token is ever
//! empty.

use crate::analysis::script::{DenseScriptClassifier, SymbolClassifier};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

const SEPARATOR: char = ' ';

/// Tokenizer emitting one token per dense-script symbol and one token per
/// space-delimited run of other symbols.
#[derive(Clone, Debug, Default)]
pub struct DenseScriptTokenizer {
    classifier: DenseScriptClassifier,
}

impl DenseScriptTokenizer {
    /// Create a tokenizer over the built-in dense-script table.
    pub fn new() -> Self {
        DenseScriptTokenizer::default()
    }

    /// Create a tokenizer with a custom classifier.
    pub fn with_classifier(classifier: DenseScriptClassifier) -> Self {
        DenseScriptTokenizer { classifier }
    }

    /// Get the classifier used by this tokenizer.
    pub fn classifier(&self) -> &DenseScriptClassifier {
        &self.classifier
    }

    /// Split `text` into tokens.
    pub fn segment(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut buffer = Buffer::default();

        for (offset, ch) in text.char_indices() {
            if self.classifier.is_dense_script(ch) {
                buffer.close(&mut tokens);
                let end = offset + ch.len_utf8();
                let position = tokens.len();
                tokens.push(Token::with_offsets(ch, position, offset, end));
            } else if ch == SEPARATOR && !buffer.is_empty() {
                buffer.close(&mut tokens);
            } else {
                buffer.push(offset, ch);
            }
        }
        buffer.close(&mut tokens);

        tokens
    }
}

impl Tokenizer for DenseScriptTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.segment(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "dense_script"
    }
}

/// The open, not yet emitted token.
#[derive(Default)]
struct Buffer {
    text: String,
    start: usize,
    end: usize,
}

impl Buffer {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, offset: usize, ch: char) {
        if self.text.is_empty() {
            self.start = offset;
        }
        self.text.push(ch);
        self.end = offset + ch.len_utf8();
    }

    fn close(&mut self, tokens: &mut Vec<Token>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let position = tokens.len();
        tokens.push(Token::with_offsets(text, position, self.start, self.end));
    }
}
