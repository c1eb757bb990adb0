//! casprep Core Library
//!
//! FASTA parsing, duplicate header/sequence accounting, CSV reports, and the
//! file-level curation steps used to assemble a Cas12 protein dataset.

pub mod types;
pub mod io;
pub mod tracker;
pub mod report;
pub mod ops;

// Re-export commonly used types and functions
pub use types::{HeaderGroup, Record, SequenceCount};
pub use io::{FastaError, FastaReader, FastaWriter};
pub use tracker::DuplicateTracker;
pub use report::{write_report, write_report_file, ReportError, ReportRow, REPORT_COLUMNS};
pub use ops::FastaStats;

/// Version information for the casprep core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
