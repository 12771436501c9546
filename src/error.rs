//! Error types for the cjkfuzz library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`FuzzError`] enum. Errors are raised synchronously by the call that
//! detects them; a failing call never yields a partial score.
//!
//! # Examples
//!
//! ```
//! use cjkfuzz::error::{FuzzError, Result};
//!
//! fn checked_limit(limit: usize) -> Result<usize> {
//!     if limit == 0 {
//!         return Err(FuzzError::invalid_argument("limit must be greater than 0"));
//!     }
//!     Ok(limit)
//! }
//!
//! assert!(checked_limit(0).is_err());
//! assert_eq!(checked_limit(3).unwrap(), 3);
//! ```

use std::io;

use thiserror::Error;

/// The main error type for cjkfuzz operations.
#[derive(Error, Debug)]
pub enum FuzzError {
    /// A required argument was absent or outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input lies outside the domain of the algorithm
    /// (zero-length Jaro input, unequal-length Hamming input, ...).
    #[error("Domain error: {0}")]
    Domain(String),

    /// An injected scorer broke its `[0, 1]` contract.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Tokenization errors raised by [`Tokenizer`](crate::analysis::tokenizer::Tokenizer)
    /// implementations. The built-in tokenizers never fail.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration content.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading config or choice files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FuzzError.
pub type Result<T> = std::result::Result<T, FuzzError>;

impl FuzzError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FuzzError::InvalidArgument(msg.into())
    }

    /// Create a new domain error.
    pub fn domain<S: Into<String>>(msg: S) -> Self {
        FuzzError::Domain(msg.into())
    }

    /// Create a new contract violation error.
    pub fn contract_violation<S: Into<String>>(msg: S) -> Self {
        FuzzError::ContractViolation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FuzzError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FuzzError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FuzzError::invalid_argument("limit must be greater than 0");
        assert_eq!(
            error.to_string(),
            "Invalid argument: limit must be greater than 0"
        );

        let error = FuzzError::domain("Undefined for sequences of zero length");
        assert_eq!(
            error.to_string(),
            "Domain error: Undefined for sequences of zero length"
        );

        let error = FuzzError::contract_violation("score 1.5 outside [0, 1]");
        assert_eq!(
            error.to_string(),
            "Contract violation: score 1.5 outside [0, 1]"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fuzz_error = FuzzError::from(io_error);

        match fuzz_error {
            FuzzError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_keeps_context() {
        let err = anyhow::anyhow!("missing file").context("failed to read choices");
        let fuzz_error = FuzzError::from(err);
        assert_eq!(
            fuzz_error.to_string(),
            "failed to read choices: missing file"
        );
    }
}
