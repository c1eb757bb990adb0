//! File-level curation steps
//!
//! Each operation takes its input and output locations as arguments and
//! returns a small summary of what it did. Errors are reported through
//! `anyhow` with the offending path attached.

pub mod count;
pub mod filter;
pub mod format;
pub mod headers;
pub mod merge;
pub mod sample;
pub mod split;
pub mod stats;

pub use count::{count_directory, count_file, CountSummary};
pub use filter::{filter_by_keyword, protein_evidence, FilterOptions, FilterSummary};
pub use format::{format_fasta, FormatOptions};
pub use headers::extract_headers;
pub use merge::merge_files;
pub use sample::{sample_fasta, sample_records, SampleSummary};
pub use split::{split_by_field, field_of};
pub use stats::FastaStats;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("Input directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Input file does not exist: {0}")]
    MissingFile(PathBuf),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
