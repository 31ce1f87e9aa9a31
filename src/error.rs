//! Setup errors reported before any table is built.

use thiserror::Error;

/// Reasons a search cannot be set up.
///
/// All of them are detected up front; once a scan has started it cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HammingError {
    /// The pattern has no characters
    #[error("pattern is empty")]
    EmptyPattern,
    /// The pattern does not fit in one machine word
    #[error("pattern is too long ({len} characters, at most {max} are supported)")]
    PatternTooLong {
        /// Length of the rejected pattern
        len: usize,
        /// Width of the machine word
        max: usize,
    },
    /// The pattern is longer than the text it should be searched in
    #[error("pattern is longer than text ({pattern_len} > {text_len})")]
    PatternLongerThanText {
        /// Length of the pattern
        pattern_len: usize,
        /// Length of the text
        text_len: usize,
    },
    /// The threshold must be strictly smaller than the pattern length
    #[error("invalid k-mismatches value {k} (must be lower than the pattern length {pattern_len})")]
    InvalidThreshold {
        /// Rejected threshold
        k: usize,
        /// Length of the pattern
        pattern_len: usize,
    },
    /// A pattern letter is missing from an explicitly given alphabet
    #[error("pattern letter {letter:?} at position {position} is not part of the alphabet")]
    LetterOutsideAlphabet {
        /// The offending letter
        letter: char,
        /// Its position in the pattern
        position: usize,
    },
}

impl HammingError {
    /// Returns true for the length related errors (empty pattern excluded).
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self,
            HammingError::PatternTooLong { .. } | HammingError::PatternLongerThanText { .. }
        )
    }
}
