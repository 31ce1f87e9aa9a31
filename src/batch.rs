//! Searching many independent texts at once.
//!
//! Records share the searcher's immutable tables; each scan owns its own
//! window table, so records are spread over the rayon thread pool while every
//! single scan stays sequential.

use memchr::memchr_iter;
use rayon::prelude::*;

use crate::Match;
use crate::error::HammingError;
use crate::searcher::HammingSearcher;

/// Outcome of scanning one record: its matches, or the reason it could not be scanned.
pub type RecordResult = Result<Vec<Match>, HammingError>;

/// Scans every record with `searcher`, in parallel.
///
/// The results are in record order. A record shorter than the pattern yields
/// [`HammingError::PatternLongerThanText`] without affecting the others.
pub fn search_batch<R>(searcher: &HammingSearcher, records: &[R]) -> Vec<RecordResult>
where
    R: AsRef<[u8]> + Sync,
{
    trace!("batch start, total: {}", records.len());
    let results: Vec<RecordResult> = records
        .par_iter()
        .map(|record| searcher.find_all(record.as_ref()))
        .collect();
    trace!(
        "batch stop, records with matches: {}",
        results.iter().filter(|r| r.as_ref().is_ok_and(|m| !m.is_empty())).count()
    );
    results
}

/// Splits `buf` into records terminated by `line_ending`.
///
/// A missing terminator after the last record is fine. With `\n` endings a
/// trailing `\r` is stripped too.
pub fn split_records(buf: &[u8], line_ending: u8) -> Vec<&[u8]> {
    let mut records = Vec::new();
    let mut start = 0;
    for end in memchr_iter(line_ending, buf) {
        records.push(trim_record(&buf[start..end], line_ending));
        start = end + 1;
    }
    if start < buf.len() {
        records.push(trim_record(&buf[start..], line_ending));
    }
    records
}

fn trim_record(record: &[u8], line_ending: u8) -> &[u8] {
    match record {
        [rest @ .., b'\r'] if line_ending == b'\n' => rest,
        _ => record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_records() {
        assert_eq!(split_records(b"ab\ncd\n", b'\n'), vec![&b"ab"[..], b"cd"]);
        assert_eq!(split_records(b"ab\r\ncd", b'\n'), vec![&b"ab"[..], b"cd"]);
        assert_eq!(split_records(b"ab\0c\rd\0", b'\0'), vec![&b"ab"[..], b"c\rd"]);
        assert_eq!(split_records(b"\n\nx", b'\n'), vec![&b""[..], b"", b"x"]);
        assert!(split_records(b"", b'\n').is_empty());
    }

    #[test]
    fn test_batch_keeps_record_order() {
        let searcher = HammingSearcher::new("ACGT", 1).unwrap();
        let records = ["ACGTTACGA", "AC", "TTTT", "ACGA"];
        let results = search_batch(&searcher, &records);

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &vec![Match { position: 0, mismatches: 0 }, Match { position: 5, mismatches: 1 }]
        );
        assert!(matches!(results[1], Err(HammingError::PatternLongerThanText { .. })));
        assert!(results[2].as_ref().unwrap().is_empty());
        assert_eq!(results[3].as_ref().unwrap(), &vec![Match { position: 0, mismatches: 1 }]);
    }

    #[test]
    fn test_batch_matches_sequential_search() {
        let searcher = HammingSearcher::new("needle", 2).unwrap();
        let records: Vec<String> = (0..200)
            .map(|i| format!("{}needxe{}noodle", "hay".repeat(i % 7), "stack".repeat(i % 3)))
            .collect();
        let results = search_batch(&searcher, &records);
        for (record, result) in records.iter().zip(results) {
            assert_eq!(result.unwrap(), searcher.find_all(record).unwrap());
        }
    }
}
