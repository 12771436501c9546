//! Text analysis: dense-script classification and tokenization.
//!
//! Mixed CJK/Latin text is segmented into tokens where each CJK ideograph or
//! kana symbol stands alone and other symbols form space-delimited runs.

pub mod script;
pub mod token;
pub mod tokenizer;

pub use script::{CodePointRange, DenseScriptClassifier, SymbolClassifier, is_dense_script};
pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::{Tokenizer, tokenize};
