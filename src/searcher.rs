//! Validated, reusable search setup.

use crate::Match;
use crate::alphabet::AlphabetIndexer;
use crate::error::HammingError;
use crate::matcher::SlidingMatcher;
use crate::pattern::PatternTable;
use crate::word::WORD_BITS;

/// A pattern and a mismatch threshold, preprocessed once and reusable across texts.
///
/// # Example
/// ```
/// use lths::HammingSearcher;
///
/// let searcher = HammingSearcher::new("AATAGC", 2).unwrap();
/// let matches = searcher.find_all("CCAACAGTG").unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!((matches[0].position, matches[0].mismatches), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct HammingSearcher {
    pattern: Vec<u8>,
    k: usize,
    indexer: AlphabetIndexer,
    table: PatternTable,
}

impl HammingSearcher {
    /// Prepares a search for `pattern` with at most `k` mismatches.
    ///
    /// The alphabet is made of the letters of the pattern.
    pub fn new(pattern: impl AsRef<[u8]>, k: usize) -> Result<Self, HammingError> {
        let pattern = pattern.as_ref();
        validate(pattern, k)?;
        Ok(Self::prepare(pattern, k, AlphabetIndexer::from_pattern(pattern)))
    }

    /// Like [`HammingSearcher::new`] but the letters are indexed from an explicit `alphabet`,
    /// which must contain every letter of the pattern.
    pub fn with_alphabet(
        pattern: impl AsRef<[u8]>,
        k: usize,
        alphabet: impl AsRef<[u8]>,
    ) -> Result<Self, HammingError> {
        let pattern = pattern.as_ref();
        validate(pattern, k)?;
        let indexer = AlphabetIndexer::from_alphabet(alphabet.as_ref(), pattern)?;
        Ok(Self::prepare(pattern, k, indexer))
    }

    fn prepare(pattern: &[u8], k: usize, indexer: AlphabetIndexer) -> Self {
        let table = PatternTable::build(pattern, &indexer);
        debug!("hamming searcher: m={}, k={}, sigma={}", pattern.len(), k, indexer.sigma());
        Self {
            pattern: pattern.to_vec(),
            k,
            indexer,
            table,
        }
    }

    /// Starts a scan of `text`, lazily yielding the windows within `k` mismatches.
    pub fn search<'a>(&'a self, text: &'a [u8]) -> Result<SlidingMatcher<'a>, HammingError> {
        self.scan(text, self.k)
    }

    /// Collects every match of the pattern in `text`, in increasing position order.
    pub fn find_all(&self, text: impl AsRef<[u8]>) -> Result<Vec<Match>, HammingError> {
        Ok(self.search(text.as_ref())?.collect())
    }

    /// Hamming distance between the pattern and every window of `text`, window by window.
    pub fn distances(&self, text: impl AsRef<[u8]>) -> Result<Vec<usize>, HammingError> {
        let text = text.as_ref();
        // no window can exceed m mismatches
        Ok(self.scan(text, self.pattern.len())?.map(|m| m.mismatches).collect())
    }

    fn scan<'a>(&'a self, text: &'a [u8], threshold: usize) -> Result<SlidingMatcher<'a>, HammingError> {
        if self.pattern.len() > text.len() {
            return Err(HammingError::PatternLongerThanText {
                pattern_len: self.pattern.len(),
                text_len: text.len(),
            });
        }
        Ok(SlidingMatcher::new(&self.indexer, &self.table, threshold, text))
    }

    /// The pattern being searched.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Pattern length `m`.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Mismatch threshold `k`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of indexed letters.
    pub fn sigma(&self) -> usize {
        self.indexer.sigma()
    }
}

fn validate(pattern: &[u8], k: usize) -> Result<(), HammingError> {
    let m = pattern.len();
    if m == 0 {
        return Err(HammingError::EmptyPattern);
    }
    if m > WORD_BITS {
        return Err(HammingError::PatternTooLong { len: m, max: WORD_BITS });
    }
    if k >= m {
        return Err(HammingError::InvalidThreshold { k, pattern_len: m });
    }
    Ok(())
}
