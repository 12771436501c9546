//! Integration tests for top-k extraction.

use cjkfuzz::config::{FuzzConfig, MatchMode};
use cjkfuzz::distance::{jaro, levenshtein};
use cjkfuzz::error::{FuzzError, Result};
use cjkfuzz::process::{self, TopK};
use cjkfuzz::sequence::symbols;

const FRUITS: [&str; 4] = ["apple", "banana", "orange", "pear"];

#[test]
fn test_extract_best_two() -> Result<()> {
    let best = process::extract_text("banana", &FRUITS, 2, &levenshtein::ratio::<char>)?;

    assert_eq!(best.len(), 2);
    assert_eq!(best[0].score, 1.0);
    assert_eq!(*best[0].choice, "banana");
    assert_eq!(*best[1].choice, "orange");
    assert!((best[1].score - 0.5833).abs() < 1e-4);

    // Orange strictly beats the two candidates left out
    for other in ["apple", "pear"] {
        let score = levenshtein::ratio(&symbols("banana"), &symbols(other))?;
        assert!(best[1].score > score);
    }

    Ok(())
}

#[test]
fn test_extract_default_limit() -> Result<()> {
    let best = process::extract_text("pare", &FRUITS, 1, &levenshtein::ratio::<char>)?;
    assert_eq!(best.len(), 1);
    assert_eq!(*best[0].choice, "pear");

    Ok(())
}

#[test]
fn test_extract_zero_limit() {
    assert!(matches!(
        process::extract_text("banana", &FRUITS, 0, &levenshtein::ratio::<char>),
        Err(FuzzError::InvalidArgument(_))
    ));
    assert!(matches!(TopK::<u8>::new(0), Err(FuzzError::InvalidArgument(_))));
}

#[test]
fn test_extract_cjk_choices() -> Result<()> {
    let choices = ["東京都", "京都府", "大阪府", "北海道"];
    let best = process::extract_text("京都", &choices, 2, &jaro::similarity::<char>)?;

    assert_eq!(best.len(), 2);
    assert_eq!(*best[0].choice, "京都府");
    assert_eq!(best[0].index, 1);
    assert!(best[0].score > best[1].score);

    Ok(())
}

#[test]
fn test_extract_with_matcher() -> Result<()> {
    let config = FuzzConfig {
        mode: MatchMode::TokenSort,
        limit: 2,
        ..FuzzConfig::default()
    };
    let matcher = config.matcher();
    let choices = vec![
        "Test Chinese 中文".to_string(),
        "Chinese Test".to_string(),
        "中文測試Chinese Test".to_string(),
    ];

    let best = process::extract_by(&choices, config.limit, |choice| {
        matcher.score("Test Chinese測試中文", choice)
    })?;
    assert_eq!(best[0].index, 2);
    assert_eq!(best[0].score, 1.0);

    let parallel = process::extract_par(&choices, config.limit, |choice| {
        matcher.score("Test Chinese測試中文", choice)
    })?;
    assert_eq!(best, parallel);

    Ok(())
}
