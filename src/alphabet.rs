//! Byte to letter index remapping.
//!
//! Only letters that can match something need an index: every distinct byte of
//! the pattern gets a dense index in `[0, sigma)`, in order of first occurrence.
//! Any other byte is "unindexed" and can never match a pattern position.

use crate::error::HammingError;

const UNINDEXED: u16 = u16::MAX;

/// Sparse to dense remap from a byte to its letter index.
#[derive(Debug, Clone)]
pub struct AlphabetIndexer {
    lookup: [u16; 256],
    sigma: usize,
}

impl AlphabetIndexer {
    /// Indexes the distinct letters of `pattern`, in order of first occurrence.
    pub fn from_pattern(pattern: &[u8]) -> Self {
        Self::from_letters(pattern)
    }

    /// Indexes the letters of an explicit `alphabet` (e.g. `ACGT`) and checks that
    /// every letter of `pattern` is part of it.
    ///
    /// Repeated alphabet letters keep their first index.
    pub fn from_alphabet(alphabet: &[u8], pattern: &[u8]) -> Result<Self, HammingError> {
        let indexer = Self::from_letters(alphabet);
        if let Some(position) = pattern.iter().position(|&b| indexer.index_of(b).is_none()) {
            return Err(HammingError::LetterOutsideAlphabet {
                letter: char::from(pattern[position]),
                position,
            });
        }
        Ok(indexer)
    }

    fn from_letters(letters: &[u8]) -> Self {
        let mut lookup = [UNINDEXED; 256];
        let mut sigma = 0;
        for &byte in letters {
            let slot = &mut lookup[usize::from(byte)];
            if *slot == UNINDEXED {
                *slot = sigma;
                sigma += 1;
            }
        }
        Self {
            lookup,
            sigma: usize::from(sigma),
        }
    }

    /// Letter index of `byte`, or `None` if it cannot match anything.
    #[inline]
    pub fn index_of(&self, byte: u8) -> Option<usize> {
        match self.lookup[usize::from(byte)] {
            UNINDEXED => None,
            index => Some(usize::from(index)),
        }
    }

    /// Number of indexed letters.
    pub fn sigma(&self) -> usize {
        self.sigma
    }
}
