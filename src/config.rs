//! Matching configuration.
//!
//! [`FuzzConfig`] collects the choices a caller makes once (scorer, match
//! mode, tokenizer, extraction limit) and turns them into the hook bundles
//! the [`fuzz`](crate::fuzz) functions take. It is serde-serializable and can
//! be loaded from a JSON file; every field has a default, so a file only
//! needs to name what it changes:
//!
//! ```json
//! { "scorer": "jaro-winkler", "prefix_weight": 0.2, "limit": 5 }
//! ```

use std::fs;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::script::{CodePointRange, DenseScriptClassifier};
use crate::analysis::tokenizer::{
    DenseScriptTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
};
use crate::distance::{jaccard, jaro, jaro_winkler, levenshtein, matching};
use crate::error::{FuzzError, Result};
use crate::fuzz::{self, FuzzOptions, Scorer, TokenSortOptions};
use crate::sequence::symbols;

/// Similarity function used to compare two sequences.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    /// Levenshtein ratio
    #[default]
    Levenshtein,
    /// Jaro similarity
    Jaro,
    /// Jaro-Winkler similarity
    JaroWinkler,
    /// Jaccard index over symbol sets
    Jaccard,
    /// Matching-symbol ratio
    Match,
}

impl ScorerKind {
    /// Build the scorer. `prefix_weight` is only used by Jaro-Winkler.
    ///
    /// The match ratio counts repeated symbols once per occurrence and can
    /// exceed 1 on repetitive input; the fuzz functions then report a
    /// contract violation.
    pub fn scorer<T>(self, prefix_weight: f64) -> Arc<dyn Scorer<T>>
    where
        T: Eq + Hash + 'static,
    {
        match self {
            ScorerKind::Levenshtein => Arc::new(levenshtein::ratio::<T>),
            ScorerKind::Jaro => Arc::new(jaro::similarity::<T>),
            ScorerKind::JaroWinkler => Arc::new(move |s1: &[T], s2: &[T]| {
                jaro_winkler::similarity(s1, s2, prefix_weight)
            }),
            ScorerKind::Jaccard => Arc::new(jaccard::index::<T>),
            ScorerKind::Match => Arc::new(matching::ratio::<T>),
        }
    }
}

/// How two texts are compared.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Whole text against whole text
    #[default]
    Ratio,
    /// Shorter text against the best window of the longer one
    Partial,
    /// Sorted tokens against sorted tokens
    TokenSort,
}

/// Tokenizer used by token-sort matching.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// One token per CJK/kana symbol, space-delimited runs otherwise
    #[default]
    DenseScript,
    /// Split on any whitespace
    Whitespace,
    /// Unicode word boundaries
    UnicodeWord,
}

impl TokenizerKind {
    /// Build the tokenizer. `extra_ranges` extend the dense-script table and
    /// are ignored by the other tokenizers.
    pub fn build(self, extra_ranges: &[CodePointRange]) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::DenseScript => {
                let classifier =
                    DenseScriptClassifier::new().with_extra_ranges(extra_ranges.iter().copied());
                Arc::new(DenseScriptTokenizer::with_classifier(classifier))
            }
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        }
    }
}

/// Matching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    pub scorer: ScorerKind,
    pub mode: MatchMode,
    pub tokenizer: TokenizerKind,
    /// Number of candidates returned by an extraction.
    pub limit: usize,
    /// Jaro-Winkler prefix weight, in `[0, 0.25]`.
    pub prefix_weight: f64,
    /// Score extraction candidates on the rayon thread pool.
    pub parallel: bool,
    /// Code-point ranges treated as dense script in addition to the
    /// built-in CJK and kana blocks.
    pub dense_ranges: Vec<CodePointRange>,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        FuzzConfig {
            scorer: ScorerKind::default(),
            mode: MatchMode::default(),
            tokenizer: TokenizerKind::default(),
            limit: 1,
            prefix_weight: jaro_winkler::DEFAULT_PREFIX_WEIGHT,
            parallel: false,
            dense_ranges: Vec::new(),
        }
    }
}

impl FuzzConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: FuzzConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.limit < 1 {
            return Err(FuzzError::invalid_argument(format!(
                "limit must be at least 1, got {}",
                self.limit
            )));
        }
        if !(0.0..=jaro_winkler::MAX_PREFIX_WEIGHT).contains(&self.prefix_weight) {
            return Err(FuzzError::invalid_argument(format!(
                "prefix_weight must be between 0 and {}, got {}",
                jaro_winkler::MAX_PREFIX_WEIGHT,
                self.prefix_weight
            )));
        }
        for range in &self.dense_ranges {
            if range.from > range.to {
                return Err(FuzzError::config(format!(
                    "dense range U+{:04X}..U+{:04X} is empty",
                    range.from, range.to
                )));
            }
            if range.to > char::MAX as u32 {
                return Err(FuzzError::config(format!(
                    "dense range end U+{:04X} is not a code point",
                    range.to
                )));
            }
        }
        Ok(())
    }

    /// Hooks for [`fuzz::ratio`](crate::fuzz::ratio) and
    /// [`fuzz::partial_ratio`](crate::fuzz::partial_ratio).
    pub fn fuzz_options<T>(&self) -> FuzzOptions<T>
    where
        T: Eq + Hash + 'static,
    {
        FuzzOptions {
            preprocess: None,
            scorer: self.scorer.scorer(self.prefix_weight),
        }
    }

    /// Hooks for [`fuzz::token_sort_ratio`](crate::fuzz::token_sort_ratio).
    pub fn token_sort_options(&self) -> TokenSortOptions {
        TokenSortOptions {
            preprocess: None,
            tokenizer: Some(self.tokenizer.build(&self.dense_ranges)),
            scorer: self.scorer.scorer(self.prefix_weight),
        }
    }

    /// Build a [`Matcher`] comparing texts the way this configuration says.
    pub fn matcher(&self) -> Matcher {
        Matcher {
            mode: self.mode,
            options: self.fuzz_options(),
            token_sort: self.token_sort_options(),
        }
    }
}

/// Text comparison with the hooks of a [`FuzzConfig`] built once.
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    options: FuzzOptions<char>,
    token_sort: TokenSortOptions,
}

impl Matcher {
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Score two texts.
    pub fn score(&self, s1: &str, s2: &str) -> Result<f64> {
        match self.mode {
            MatchMode::Ratio => {
                let (a, b) = (symbols(s1), symbols(s2));
                fuzz::ratio(Some(&a[..]), Some(&b[..]), &self.options)
            }
            MatchMode::Partial => {
                let (a, b) = (symbols(s1), symbols(s2));
                fuzz::partial_ratio(Some(&a[..]), Some(&b[..]), &self.options)
            }
            MatchMode::TokenSort => fuzz::token_sort_ratio(Some(s1), Some(s2), &self.token_sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = FuzzConfig::default();
        assert_eq!(config.scorer, ScorerKind::Levenshtein);
        assert_eq!(config.mode, MatchMode::Ratio);
        assert_eq!(config.tokenizer, TokenizerKind::DenseScript);
        assert_eq!(config.limit, 1);
        assert_eq!(config.prefix_weight, 0.1);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: FuzzConfig =
            serde_json::from_str(r#"{"scorer": "jaro-winkler", "mode": "token-sort", "limit": 3}"#)
                .unwrap();
        assert_eq!(config.scorer, ScorerKind::JaroWinkler);
        assert_eq!(config.mode, MatchMode::TokenSort);
        assert_eq!(config.limit, 3);
        assert_eq!(config.tokenizer, TokenizerKind::DenseScript);
    }

    #[test]
    fn test_json_names() {
        let json = serde_json::to_value(FuzzConfig::default()).unwrap();
        assert_eq!(json["scorer"], "levenshtein");
        assert_eq!(json["tokenizer"], "dense-script");
        assert_eq!(json["dense_ranges"], serde_json::json!([]));
    }

    #[test]
    fn test_validate() {
        let config = FuzzConfig {
            limit: 0,
            ..FuzzConfig::default()
        };
        assert!(matches!(config.validate(), Err(FuzzError::InvalidArgument(_))));

        for prefix_weight in [-0.01, 0.26, f64::NAN] {
            let config = FuzzConfig {
                prefix_weight,
                ..FuzzConfig::default()
            };
            assert!(matches!(config.validate(), Err(FuzzError::InvalidArgument(_))));
        }

        let config = FuzzConfig {
            dense_ranges: vec![CodePointRange::new(0xD7AF, 0xAC00)],
            ..FuzzConfig::default()
        };
        assert!(matches!(config.validate(), Err(FuzzError::Config(_))));

        let config = FuzzConfig {
            dense_ranges: vec![CodePointRange::new(0x10000, 0x110000)],
            ..FuzzConfig::default()
        };
        assert!(matches!(config.validate(), Err(FuzzError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"scorer": "jaccard", "dense_ranges": [{{"from": 44032, "to": 55215}}]}}"#
        )
        .unwrap();

        let config = FuzzConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scorer, ScorerKind::Jaccard);
        assert_eq!(config.dense_ranges, vec![CodePointRange::new(0xAC00, 0xD7AF)]);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = FuzzConfig::from_file("/nonexistent/cjkfuzz.json").unwrap_err();
        assert!(missing.to_string().contains("failed to read config file"));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            FuzzConfig::from_file(file.path()),
            Err(FuzzError::Json(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"limit": 0}}"#).unwrap();
        assert!(matches!(
            FuzzConfig::from_file(file.path()),
            Err(FuzzError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_scorer_kinds() {
        let a = symbols("MARTHA");
        let b = symbols("MARHTA");
        let score = |kind: ScorerKind| kind.scorer::<char>(0.1).score(&a, &b).unwrap();

        assert!((score(ScorerKind::Levenshtein) - 10.0 / 12.0).abs() < 1e-12);
        assert!((score(ScorerKind::Jaro) - 0.9444444444444445).abs() < 1e-12);
        assert!((score(ScorerKind::JaroWinkler) - 0.9611111111111111).abs() < 1e-12);
        assert_eq!(score(ScorerKind::Jaccard), 1.0);

        // Both "A"s of MARTHA match both "A"s of MARHTA.
        assert!(score(ScorerKind::Match) > 1.0);
        let matched = ScorerKind::Match
            .scorer::<char>(0.1)
            .score(&symbols("abcd"), &symbols("abce"))
            .unwrap();
        assert_eq!(matched, 0.75);
    }

    #[test]
    fn test_token_sort_options_use_dense_ranges() {
        let config = FuzzConfig {
            dense_ranges: vec![CodePointRange::new(0xAC00, 0xD7AF)],
            ..FuzzConfig::default()
        };
        let options = config.token_sort_options();
        let tokenizer = options.tokenizer.as_deref().unwrap();
        let tokens: Vec<String> = tokenizer.tokenize("한국").unwrap().map(|t| t.text).collect();
        assert_eq!(tokens, vec!["한", "국"]);

        let tokenizer = TokenizerKind::Whitespace.build(&config.dense_ranges);
        assert_eq!(tokenizer.name(), "whitespace");
    }

    #[test]
    fn test_matcher_modes() {
        let mut config = FuzzConfig::default();
        assert!(config.matcher().score("test", "more tests").unwrap() < 1.0);

        config.mode = MatchMode::Partial;
        assert_eq!(config.matcher().score("test", "more tests").unwrap(), 1.0);

        config.mode = MatchMode::TokenSort;
        let matcher = config.matcher();
        assert_eq!(matcher.mode(), MatchMode::TokenSort);
        assert_eq!(matcher.score("中文test", "test中文").unwrap(), 1.0);
    }
}
