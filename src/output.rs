//! Human readable rendering of matches.

use std::fmt::{Display, Error, Formatter};

use crate::Match;

/// A match together with the text it was found in, ready to be printed.
///
/// Renders as `<position>,<mismatches>\t<matched substring>`, prefixed with
/// `<record>:` when the text is one record of a batch.
#[derive(Debug, Clone, Copy)]
pub struct MatchReport<'a> {
    found: Match,
    text: &'a [u8],
    pattern_len: usize,
    record: Option<usize>,
}

impl<'a> MatchReport<'a> {
    /// Report of `found` in `text` for a pattern of length `pattern_len`.
    pub fn new(found: Match, text: &'a [u8], pattern_len: usize) -> Self {
        Self {
            found,
            text,
            pattern_len,
            record: None,
        }
    }

    /// Tags the report with the 1-based number of the record it comes from.
    pub fn record(mut self, record: usize) -> Self {
        self.record = Some(record);
        self
    }

    /// The matched window of the text.
    pub fn matched(&self) -> &'a [u8] {
        let start = self.found.position;
        &self.text[start..start + self.pattern_len]
    }
}

impl Display for MatchReport<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if let Some(record) = self.record {
            write!(f, "{record}:")?;
        }
        write!(
            f,
            "{},{}\t{}",
            self.found.position,
            self.found.mismatches,
            String::from_utf8_lossy(self.matched())
        )
    }
}
