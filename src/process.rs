//! Top-k extraction of the best-matching candidates for a query.
//!
//! # Examples
//!
//! ```
//! use cjkfuzz::distance::levenshtein;
//! use cjkfuzz::process;
//!
//! let choices = ["apple", "banana", "orange", "pear"];
//! let best = process::extract_text("banana", &choices, 2, &levenshtein::ratio::<char>).unwrap();
//!
//! assert_eq!(*best[0].choice, "banana");
//! assert_eq!(*best[1].choice, "orange");
//! ```

pub mod extract;
pub mod top_k;

pub use extract::{ExtractedMatch, extract, extract_by, extract_par, extract_text};
pub use top_k::TopK;
