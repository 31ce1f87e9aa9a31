//! Per-letter position masks of the pattern.

use crate::alphabet::AlphabetIndexer;
use crate::word::{Word, WordTable};

/// For each letter index, the word whose bit `i` is set iff the pattern holds
/// that letter at position `i`.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PatternTable {
    table: WordTable,
    len: usize,
}

impl PatternTable {
    /// Builds the masks of `pattern`. The pattern must fit in a [`Word`].
    pub fn build(pattern: &[u8], indexer: &AlphabetIndexer) -> Self {
        let mut table = WordTable::zeroed(indexer.sigma());
        for (i, &byte) in pattern.iter().enumerate() {
            if let Some(letter) = indexer.index_of(byte) {
                table.set(letter, i);
            }
        }
        Self {
            table,
            len: pattern.len(),
        }
    }

    /// Pattern length `m`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if built from an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The masks, in letter index order.
    pub fn words(&self) -> &[Word] {
        self.table.words()
    }

    /// Mask of the letter with index `letter`.
    pub fn mask(&self, letter: usize) -> Word {
        self.table[letter]
    }
}
