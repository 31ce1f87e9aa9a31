//! Configuration options for lths.
//!
//! `LthsOptions` is both the command line definition of the `lths` binary
//! (behind the `cli` feature) and a builder for library users.

use derive_builder::Builder;

use crate::error::HammingError;
use crate::searcher::HammingSearcher;

/// lths - Linear Time Hamming Search
///
/// Search for a pattern in a text with k-mismatches under the Hamming distance model.
///
/// Each match is printed as `<position>,<mismatches><TAB><matched text>`.
/// Without a TEXT argument, every line of the input is searched as a separate
/// text and matches are prefixed with the line number.
#[derive(Builder, Debug, Clone, Default)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "lths", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct LthsOptions {
    /// The pattern (needle)
    ///
    /// At most 64 characters long.
    #[builder(setter(into))]
    #[cfg_attr(feature = "cli", arg(value_name = "PATTERN"))]
    pub pattern: String,

    /// K-mismatches threshold
    ///
    /// Must be lower than the pattern length.
    #[cfg_attr(feature = "cli", arg(value_name = "K_MISMATCHES"))]
    pub k_mismatches: usize,

    /// The text to search (haystack)
    ///
    /// When omitted, texts are read from --input, one per line.
    #[builder(setter(into, strip_option))]
    #[cfg_attr(feature = "cli", arg(value_name = "TEXT"))]
    pub text: Option<String>,

    /// Alphabet string, e.g. ACGT
    ///
    /// Every pattern letter must belong to it. Letters of the text outside of
    /// the alphabet always count as mismatches.
    #[builder(setter(into, strip_option))]
    #[cfg_attr(feature = "cli", arg(short = 'A', long, help_heading = "Search"))]
    pub alphabet: Option<String>,

    /// Read the texts from this file instead of stdin (`-` for stdin)
    #[builder(setter(into, strip_option))]
    #[cfg_attr(feature = "cli", arg(short, long, conflicts_with = "text", help_heading = "Input"))]
    pub input: Option<String>,

    /// Read input delimited by ASCII NUL characters instead of newlines
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub read0: bool,

    /// Only print the number of matches
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Output"))]
    pub count: bool,

    /// Print output delimited by ASCII NUL characters instead of newlines
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl LthsOptions {
    /// Validates the pattern and threshold and prepares the searcher.
    pub fn searcher(&self) -> Result<HammingSearcher, HammingError> {
        match &self.alphabet {
            Some(alphabet) => HammingSearcher::with_alphabet(&self.pattern, self.k_mismatches, alphabet),
            None => HammingSearcher::new(&self.pattern, self.k_mismatches),
        }
    }

    /// Terminator of input records.
    pub fn line_ending(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Terminator printed after each output line.
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = LthsOptionsBuilder::default()
            .pattern("AATAGC")
            .k_mismatches(2usize)
            .text("CCAACAGTG")
            .build()
            .unwrap();
        assert_eq!(opts.text.as_deref(), Some("CCAACAGTG"));
        assert_eq!(opts.line_ending(), b'\n');
        assert_eq!(opts.output_ending(), "\n");
        assert_eq!(opts.searcher().unwrap().k(), 2);
    }

    #[test]
    fn test_builder_alphabet() {
        let opts = LthsOptionsBuilder::default()
            .pattern("ACGN")
            .k_mismatches(1usize)
            .alphabet("ACGT")
            .read0(true)
            .build()
            .unwrap();
        assert_eq!(opts.line_ending(), b'\0');
        assert!(matches!(
            opts.searcher(),
            Err(HammingError::LetterOutsideAlphabet { letter: 'N', position: 3 })
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_args() {
        use clap::Parser as _;

        let opts = LthsOptions::parse_from(["lths", "-A", "ACGT", "GATTACA", "1", "TTGATTACA"]);
        assert_eq!(opts.pattern, "GATTACA");
        assert_eq!(opts.k_mismatches, 1);
        assert_eq!(opts.text.as_deref(), Some("TTGATTACA"));
        assert_eq!(opts.alphabet.as_deref(), Some("ACGT"));

        let opts = LthsOptions::parse_from(["lths", "--count", "--print0", "-i", "reads.txt", "ACGT", "0"]);
        assert!(opts.count && opts.print0);
        assert_eq!(opts.input.as_deref(), Some("reads.txt"));
        assert_eq!(opts.text, None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_rejects_text_with_input() {
        use clap::Parser as _;

        assert!(LthsOptions::try_parse_from(["lths", "-i", "reads.txt", "ACGT", "0", "ACGTA"]).is_err());
        assert!(LthsOptions::try_parse_from(["lths", "ACGT", "-1", "ACGTA"]).is_err());
    }
}
