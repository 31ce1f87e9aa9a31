//! The sliding window matcher.
//!
//! The window table `T` mirrors, for the current window, which positions hold
//! which letter. Each text character is admitted at the highest meaningful bit
//! (`m - 1`), the window is scored against the pattern table and every word of
//! `T` is shifted down by one so that the next character lands on a free slot.
//!
//! For a position `i`, exactly one pattern word has bit `i` set; the term
//! `(P[a] ^ T[a]) & P[a]` keeps that bit iff the window does not hold letter
//! `a` there. Summing the population counts over all letters thus gives the
//! Hamming distance of the window, whatever the value of `k`.

use std::iter::FusedIterator;

use crate::Match;
use crate::alphabet::AlphabetIndexer;
use crate::pattern::PatternTable;
use crate::word::WordTable;

//==============================================================================
/// Lazy scan of a text, yielding every window within the mismatch threshold.
///
/// Obtained through [`HammingSearcher::search`](crate::HammingSearcher::search).
/// Matches come out in increasing position order.
#[derive(Debug, Clone)]
pub struct SlidingMatcher<'a> {
    indexer: &'a AlphabetIndexer,
    pattern: &'a PatternTable,
    window: WordTable,
    text: &'a [u8],
    threshold: usize,
    cursor: usize,
}

impl<'a> SlidingMatcher<'a> {
    /// Expects `1 <= pattern.len() <= text.len()`, checked by the searcher.
    pub(crate) fn new(
        indexer: &'a AlphabetIndexer,
        pattern: &'a PatternTable,
        threshold: usize,
        text: &'a [u8],
    ) -> Self {
        let m = pattern.len();
        debug_assert!(m >= 1 && m <= text.len());

        // the first m-1 characters; the loop admits the rest
        let mut window = WordTable::zeroed(indexer.sigma());
        for (i, &byte) in text[..m - 1].iter().enumerate() {
            if let Some(letter) = indexer.index_of(byte) {
                window.set(letter, i);
            }
        }

        Self {
            indexer,
            pattern,
            window,
            text,
            threshold,
            cursor: m - 1,
        }
    }

    /// Admits `byte` as the newest window position, returns the mismatch count
    /// of the resulting window and slides the window forward.
    #[inline]
    fn step(&mut self, byte: u8) -> usize {
        if let Some(letter) = self.indexer.index_of(byte) {
            self.window.set(letter, self.pattern.len() - 1);
        }

        let mut mismatches = 0;
        for (&p, t) in self.pattern.words().iter().zip(self.window.words_mut()) {
            let diff = (p ^ *t) & p;
            mismatches += diff.count_ones() as usize;
            *t >>= 1;
        }
        mismatches
    }

    fn remaining_windows(&self) -> usize {
        self.text.len() - self.cursor
    }
}

impl Iterator for SlidingMatcher<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while self.cursor < self.text.len() {
            let i = self.cursor;
            self.cursor += 1;
            let mismatches = self.step(self.text[i]);
            if mismatches <= self.threshold {
                return Some(Match {
                    position: i + 1 - self.pattern.len(),
                    mismatches,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_windows()))
    }
}

impl FusedIterator for SlidingMatcher<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(pattern: &[u8], k: usize, text: &[u8]) -> Vec<(usize, usize)> {
        let indexer = AlphabetIndexer::from_pattern(pattern);
        let table = PatternTable::build(pattern, &indexer);
        SlidingMatcher::new(&indexer, &table, k, text)
            .map(|m| (m.position, m.mismatches))
            .collect()
    }

    #[test]
    fn test_window_initialization() {
        let indexer = AlphabetIndexer::from_pattern(b"AATAGC");
        let table = PatternTable::build(b"AATAGC", &indexer);
        let matcher = SlidingMatcher::new(&indexer, &table, 2, b"CCAACAGTG");
        let a = indexer.index_of(b'A').unwrap();
        let c = indexer.index_of(b'C').unwrap();
        // first 5 characters: C C A A C
        assert_eq!(matcher.window[a], 0b01100);
        assert_eq!(matcher.window[c], 0b10011);
        assert_eq!(matcher.cursor, 5);
    }

    #[test]
    fn test_unindexed_characters_leave_window_empty() {
        let indexer = AlphabetIndexer::from_pattern(b"AC");
        let table = PatternTable::build(b"AC", &indexer);
        let matcher = SlidingMatcher::new(&indexer, &table, 1, b"xyz");
        assert!(matcher.window.words().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_step_yields_distance_of_every_window() {
        // threshold m lets every window through
        assert_eq!(
            scan(b"AATAGC", 6, b"CCAACAGTG"),
            vec![(0, 5), (1, 5), (2, 2), (3, 5)]
        );
    }

    #[test]
    fn test_bits_above_pattern_stay_clear() {
        let pattern = b"abc";
        let indexer = AlphabetIndexer::from_pattern(pattern);
        let table = PatternTable::build(pattern, &indexer);
        let mut matcher = SlidingMatcher::new(&indexer, &table, 2, b"abcabcabcabc");
        while matcher.next().is_some() {
            assert!(matcher.window.words().iter().all(|&w| w >> pattern.len() == 0));
        }
    }

    #[test]
    fn test_single_letter_pattern() {
        assert_eq!(scan(b"a", 0, b"banana"), vec![(1, 0), (3, 0), (5, 0)]);
    }

    #[test]
    fn test_pattern_as_long_as_text() {
        assert_eq!(scan(b"abcd", 1, b"abxd"), vec![(0, 1)]);
        assert_eq!(scan(b"abcd", 1, b"axxd"), vec![]);
    }

    #[test]
    fn test_size_hint_bounds_remaining_windows() {
        let indexer = AlphabetIndexer::from_pattern(b"ab");
        let table = PatternTable::build(b"ab", &indexer);
        let mut matcher = SlidingMatcher::new(&indexer, &table, 1, b"abab");
        assert_eq!(matcher.size_hint(), (0, Some(3)));
        matcher.next();
        assert_eq!(matcher.size_hint(), (0, Some(2)));
    }
}
