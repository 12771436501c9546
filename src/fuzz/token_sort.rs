//! Order-insensitive comparison over sorted tokens.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::tokenizer::{DenseScriptTokenizer, Tokenizer};
use crate::distance::levenshtein;
use crate::error::{FuzzError, Result};
use crate::fuzz::{Preprocessor, Scorer, check_score, required};

/// Hooks used by [`token_sort_ratio`].
///
/// Preprocessing runs over the characters of each input, tokenizing runs on
/// the preprocessed text, and the scorer compares the sorted token lists, so
/// an edit is a whole token rather than a single character.
pub struct TokenSortOptions {
    /// Optional preprocessing applied to both inputs.
    pub preprocess: Option<Arc<dyn Preprocessor<char>>>,
    /// The tokenizer. `None` is rejected at call time.
    pub tokenizer: Option<Arc<dyn Tokenizer>>,
    /// The similarity function over token sequences.
    pub scorer: Arc<dyn Scorer<String>>,
}

impl TokenSortOptions {
    /// Dense-script tokenizer, Levenshtein ratio over tokens, no preprocessing.
    pub fn new() -> Self {
        TokenSortOptions {
            preprocess: None,
            tokenizer: Some(Arc::new(DenseScriptTokenizer::new())),
            scorer: Arc::new(levenshtein::ratio::<String>),
        }
    }

    pub fn with_scorer<S>(mut self, scorer: S) -> Self
    where
        S: Scorer<String> + 'static,
    {
        self.scorer = Arc::new(scorer);
        self
    }

    pub fn with_preprocess<P>(mut self, preprocess: P) -> Self
    where
        P: Preprocessor<char> + 'static,
    {
        self.preprocess = Some(Arc::new(preprocess));
        self
    }

    pub fn with_tokenizer<K>(mut self, tokenizer: K) -> Self
    where
        K: Tokenizer + 'static,
    {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Use an already shared tokenizer.
    pub fn with_shared_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Remove the tokenizer. Scoring with these options fails.
    pub fn without_tokenizer(mut self) -> Self {
        self.tokenizer = None;
        self
    }
}

impl Default for TokenSortOptions {
    fn default() -> Self {
        TokenSortOptions::new()
    }
}

impl Clone for TokenSortOptions {
    fn clone(&self) -> Self {
        TokenSortOptions {
            preprocess: self.preprocess.clone(),
            tokenizer: self.tokenizer.clone(),
            scorer: Arc::clone(&self.scorer),
        }
    }
}

impl fmt::Debug for TokenSortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSortOptions")
            .field("preprocess", &self.preprocess.is_some())
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.name()))
            .finish_non_exhaustive()
    }
}

/// Score two texts after tokenizing and sorting both.
///
/// Word order does not matter: `"token sort"` and `"sort token"` score 1.0.
/// Tokens sort by their text, so the comparison is stable regardless of
/// which script each token belongs to.
///
/// Fails with [`FuzzError::InvalidArgument`] if either input or the
/// tokenizer is absent, and with [`FuzzError::ContractViolation`] if the
/// scorer leaves `[0, 1]`.
///
/// # Examples
///
/// ```
/// use cjkfuzz::fuzz::{self, TokenSortOptions};
///
/// let score = fuzz::token_sort_ratio(
///     Some("中文測試Chinese Test"),
///     Some("Test Chinese測試中文"),
///     &TokenSortOptions::new(),
/// )
/// .unwrap();
/// assert_eq!(score, 1.0);
/// ```
pub fn token_sort_ratio(
    s1: Option<&str>,
    s2: Option<&str>,
    options: &TokenSortOptions,
) -> Result<f64> {
    let s1 = required(s1, "s1")?;
    let s2 = required(s2, "s2")?;
    let tokenizer = options
        .tokenizer
        .as_deref()
        .ok_or_else(|| FuzzError::invalid_argument("tokenizer must be present"))?;

    let tokens1 = sorted_tokens(s1, options.preprocess.as_deref(), tokenizer)?;
    let tokens2 = sorted_tokens(s2, options.preprocess.as_deref(), tokenizer)?;
    debug!(
        "token_sort_ratio with {}: {} vs {} tokens",
        tokenizer.name(),
        tokens1.len(),
        tokens2.len()
    );

    check_score(options.scorer.score(&tokens1, &tokens2)?)
}

/// [`token_sort_ratio`] with default options.
pub fn token_sort_ratio_str(s1: &str, s2: &str) -> Result<f64> {
    token_sort_ratio(Some(s1), Some(s2), &TokenSortOptions::new())
}

fn sorted_tokens(
    text: &str,
    preprocess: Option<&dyn Preprocessor<char>>,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<String>> {
    let mut tokens: Vec<String> = match preprocess {
        Some(preprocess) => {
            let chars: Vec<char> = text.chars().collect();
            let text: String = preprocess.preprocess(&chars).into_iter().collect();
            tokenizer.tokenize(&text)?.map(|token| token.text).collect()
        }
        None => tokenizer.tokenize(text)?.map(|token| token.text).collect(),
    };
    tokens.sort_unstable();
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_word_order_is_ignored() {
        assert_eq!(token_sort_ratio_str("token sort", "sort token").unwrap(), 1.0);
        assert_eq!(
            token_sort_ratio_str("中文測試Chinese Test", "Test Chinese測試中文").unwrap(),
            1.0
        );
    }

    #[test]
    fn test_edits_count_whole_tokens() {
        // [a, b, c] vs [a, b, d]: one token substitution over six tokens.
        let score = token_sort_ratio_str("c b a", "a d b").unwrap();
        assert!((score - 5.0 / 6.0).abs() < 1e-12);

        // Sorting moves the differing symbol, so the edit costs a deletion
        // plus an insertion.
        let score = token_sort_ratio_str("中文測試", "英文測試").unwrap();
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_absent_input_and_tokenizer() {
        let options = TokenSortOptions::new();
        assert!(matches!(
            token_sort_ratio(None, Some("a"), &options),
            Err(FuzzError::InvalidArgument(_))
        ));
        assert!(matches!(
            token_sort_ratio(Some("a"), None, &options),
            Err(FuzzError::InvalidArgument(_))
        ));

        let options = TokenSortOptions::new().without_tokenizer();
        assert!(matches!(
            token_sort_ratio(Some("a"), Some("a"), &options),
            Err(FuzzError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_inputs_have_no_tokens() {
        assert!(matches!(
            token_sort_ratio_str("", ""),
            Err(FuzzError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_preprocess_runs_before_tokenizing() {
        let lowercase = |s: &[char]| -> Vec<char> { s.iter().flat_map(|c| c.to_lowercase()).collect() };
        let options = TokenSortOptions::new().with_preprocess(lowercase);
        let score = token_sort_ratio(Some("Sort TOKEN"), Some("token sort"), &options).unwrap();
        assert_eq!(score, 1.0);
        assert!(token_sort_ratio_str("Sort TOKEN", "token sort").unwrap() < 1.0);
    }

    #[test]
    fn test_custom_tokenizer_and_scorer() {
        let options = TokenSortOptions::new().with_tokenizer(WhitespaceTokenizer::new());
        // Tabs separate for the whitespace tokenizer but not for the default.
        assert_eq!(
            token_sort_ratio(Some("a\tb"), Some("b a"), &options).unwrap(),
            1.0
        );
        assert!(token_sort_ratio_str("a\tb", "b a").unwrap() < 1.0);

        let options = TokenSortOptions::new()
            .with_scorer(|_: &[String], _: &[String]| -> Result<f64> { Ok(-1.0) });
        assert!(matches!(
            token_sort_ratio(Some("a"), Some("b"), &options),
            Err(FuzzError::ContractViolation(_))
        ));
    }

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<crate::analysis::token::TokenStream> {
            Err(FuzzError::analysis("dictionary not loaded"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_tokenizer_error_propagates() {
        let options = TokenSortOptions::new().with_tokenizer(FailingTokenizer);
        assert!(matches!(
            token_sort_ratio(Some("a"), Some("b"), &options),
            Err(FuzzError::Analysis(_))
        ));
    }

    #[test]
    fn test_debug_names_tokenizer() {
        let debug = format!("{:?}", TokenSortOptions::new());
        assert!(debug.contains("dense_script"));
    }
}
