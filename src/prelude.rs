//! Convenience re-exports of commonly used types.
//!
//! `use lths::prelude::*;` brings the searcher, its results and the batch
//! helpers into scope.

pub use crate::batch::{RecordResult, search_batch, split_records};
pub use crate::options::{LthsOptions, LthsOptionsBuilder};
pub use crate::*;
