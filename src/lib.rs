//! LTHS: Linear Time Hamming Search.
//!
//! Finds every window of a text that differs from a pattern in at most `k`
//! positions (the k-mismatches problem under the Hamming distance). Each letter
//! of the pattern gets a machine word whose bits mark the positions it occupies;
//! a mirror table tracks the letters of the current text window, and the
//! mismatch count of every window falls out of one XOR/AND/popcount per letter.
//! The search runs in `O(n * sigma)` word operations, independently of `k`,
//! for patterns of up to 64 characters.
//!
//! # Examples
//!
//! ```
//! use lths::prelude::*;
//!
//! let searcher = HammingSearcher::new("AATAGC", 2).unwrap();
//! let text = "CCAACAGTG";
//! for found in searcher.search(text.as_bytes()).unwrap() {
//!     let report = MatchReport::new(found, text.as_bytes(), searcher.pattern_len());
//!     assert_eq!(report.to_string(), "2,2\tAACAGT");
//! }
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::error::HammingError;
pub use crate::matcher::SlidingMatcher;
pub use crate::options::LthsOptions;
pub use crate::output::MatchReport;
pub use crate::searcher::HammingSearcher;

pub mod alphabet;
pub mod batch;
mod error;
mod matcher;
pub mod naive;
pub mod options;
mod output;
pub mod pattern;
pub mod prelude;
mod searcher;
pub mod word;

//------------------------------------------------------------------------------
/// A window of the text within the mismatch threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// Start of the window in the text
    pub position: usize,
    /// Number of positions where the window differs from the pattern
    pub mismatches: usize,
}
