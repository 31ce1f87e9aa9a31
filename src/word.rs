//! Machine words used as position bitsets, and the dense per-letter table of them.
//!
//! Both the pattern table and the sliding window table are a [`WordTable`]:
//! one word per alphabet index, where bit `i` stands for pattern/window
//! position `i` (least significant bit first).

use std::ops::Index;

/// A fixed-width bitset over pattern or window positions.
pub type Word = u64;

/// Number of positions a single [`Word`] can hold, and so the longest pattern we accept.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Contiguous table of one [`Word`] per alphabet index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordTable {
    words: Vec<Word>,
}

impl WordTable {
    /// Creates a table of `sigma` words, all zero.
    pub fn zeroed(sigma: usize) -> Self {
        Self { words: vec![0; sigma] }
    }

    /// Number of words, i.e. the alphabet size the table was built for.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table holds no word at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sets bit `position` of the word belonging to `letter`.
    #[inline]
    pub fn set(&mut self, letter: usize, position: usize) {
        debug_assert!(position < WORD_BITS);
        self.words[letter] |= 1 << position;
    }

    /// Returns true if bit `position` of the word belonging to `letter` is set.
    #[inline]
    pub fn is_set(&self, letter: usize, position: usize) -> bool {
        (self.words[letter] >> position) & 1 == 1
    }

    /// The words, in alphabet index order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl Index<usize> for WordTable {
    type Output = Word;

    fn index(&self, letter: usize) -> &Word {
        &self.words[letter]
    }
}
