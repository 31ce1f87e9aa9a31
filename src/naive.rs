//! Brute-force reference implementation.
//!
//! Compares the pattern against every window character by character, in
//! `O(nm)`. It has none of the length limits of the bit-parallel matcher and is
//! intentionally straightforward: it is the oracle the tests and benchmarks
//! measure [`HammingSearcher`](crate::HammingSearcher) against.

use crate::Match;

/// Number of positions at which `a` and `b` differ.
///
/// Both slices are expected to have the same length; extra characters of the
/// longer one are ignored.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Every window of `text` within `k` mismatches of `pattern`, in position order.
///
/// An empty pattern, or one longer than the text, has no match.
pub fn naive_search(pattern: &[u8], k: usize, text: &[u8]) -> Vec<Match> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter_map(|(position, window)| {
            let mismatches = hamming_distance(pattern, window);
            (mismatches <= k).then_some(Match { position, mismatches })
        })
        .collect()
}
