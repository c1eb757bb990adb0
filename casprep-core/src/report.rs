//! Duplicate report writer
//!
//! One CSV row per distinct (header, sequence) pair, under the fixed column
//! row `duplicate,header,header_count,sequence_count,sequence`.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::io::ensure_parent_dir;
use crate::tracker::DuplicateTracker;

/// Column names of the report, in order.
pub const REPORT_COLUMNS: [&str; 5] = ["duplicate", "header", "header_count", "sequence_count", "sequence"];

/// Flag value for a sequence seen more than once under its header.
pub const DUPLICATE_FLAG: &str = "duplicate";
/// Flag value for a sequence seen once under its header.
pub const UNIQUE_FLAG: &str = "no";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub duplicate: String,
    pub header: String,
    pub header_count: usize,
    pub sequence_count: usize,
    pub sequence: String,
}

impl ReportRow {
    pub fn is_duplicate(&self) -> bool {
        self.duplicate == DUPLICATE_FLAG
    }
}

/// Flatten a tracker into report rows, grouped by header.
pub fn report_rows(tracker: &DuplicateTracker) -> Vec<ReportRow> {
    tracker
        .groups()
        .flat_map(|group| {
            group.sequences().map(move |entry| ReportRow {
                duplicate: (if entry.is_duplicate() { DUPLICATE_FLAG } else { UNIQUE_FLAG }).to_string(),
                header: group.header().to_string(),
                header_count: group.total(),
                sequence_count: entry.count,
                sequence: entry.sequence.clone(),
            })
        })
        .collect()
}

/// Write the report to any writer. Returns the number of data rows.
pub fn write_report<W: Write>(tracker: &DuplicateTracker, writer: W) -> ReportResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(REPORT_COLUMNS)?;

    let rows = report_rows(tracker);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

/// Write the report to `path`, creating parent directories first.
pub fn write_report_file<P: AsRef<Path>>(tracker: &DuplicateTracker, path: P) -> ReportResult<usize> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path)?;
    let rows = write_report(tracker, file)?;
    log::debug!("Wrote {} report rows to {}", rows, path.display());
    Ok(rows)
}

/// Read a report back into rows.
pub fn read_report<P: AsRef<Path>>(path: P) -> ReportResult<Vec<ReportRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
