//! Whole-file summary: record counts, lengths and duplicate accounting

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::io::fasta::FastaReader;
use crate::tracker::DuplicateTracker;
use crate::types::Record;

#[derive(Debug, Clone, Serialize)]
pub struct FastaStats {
    pub records: usize,
    pub total_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub mean_length: f64,
    pub empty_records: usize,
    pub distinct_headers: usize,
    pub repeated_headers: usize,
    pub duplicate_pairs: usize,
    pub dropped_lines: usize,

    #[serde(skip)]
    tracker: DuplicateTracker,
}

impl FastaStats {
    fn new() -> Self {
        Self {
            records: 0,
            total_length: 0,
            min_length: usize::MAX,
            max_length: 0,
            mean_length: 0.0,
            empty_records: 0,
            distinct_headers: 0,
            repeated_headers: 0,
            duplicate_pairs: 0,
            dropped_lines: 0,
            tracker: DuplicateTracker::new(),
        }
    }

    fn add_record(&mut self, record: &Record) {
        let len = record.len();
        self.records += 1;
        self.total_length += len;
        self.min_length = self.min_length.min(len);
        self.max_length = self.max_length.max(len);
        if record.is_empty() {
            self.empty_records += 1;
        }
        self.tracker.add_record(record);
    }

    fn finalize(&mut self) {
        if self.records == 0 {
            self.min_length = 0;
            return;
        }
        self.mean_length = self.total_length as f64 / self.records as f64;
        self.distinct_headers = self.tracker.distinct_headers();
        self.repeated_headers = self.tracker.repeated_headers();
        self.duplicate_pairs = self.tracker.duplicate_pairs();
    }

    /// Summarise a FASTA file in one streaming pass.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = FastaReader::from_path(path)
            .with_context(|| format!("Failed to open FASTA file: {}", path.display()))?;

        let mut stats = Self::new();
        for record in reader.by_ref() {
            let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
            stats.add_record(&record);
        }
        stats.dropped_lines = reader.dropped_lines();
        stats.finalize();

        Ok(stats)
    }

    pub fn from_records<'a, I: IntoIterator<Item = &'a Record>>(records: I) -> Self {
        let mut stats = Self::new();
        for record in records {
            stats.add_record(record);
        }
        stats.finalize();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_stats_from_records() {
        let records = vec![
            Record::new("h1", "MKVL"),
            Record::new("h1", "MKVL"),
            Record::new("h2", "MS"),
            Record::new("h3", ""),
        ];
        let stats = FastaStats::from_records(&records);

        assert_eq!(stats.records, 4);
        assert_eq!(stats.total_length, 10);
        assert_eq!(stats.min_length, 0);
        assert_eq!(stats.max_length, 4);
        assert_eq!(stats.mean_length, 2.5);
        assert_eq!(stats.empty_records, 1);
        assert_eq!(stats.distinct_headers, 3);
        assert_eq!(stats.repeated_headers, 1);
        assert_eq!(stats.duplicate_pairs, 1);
    }

    #[test]
    fn test_stats_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fasta");
        fs::write(&path, "").unwrap();

        let stats = FastaStats::from_path(&path).unwrap();
        assert_eq!(stats.records, 0);
        assert_eq!(stats.min_length, 0);
        assert_eq!(stats.mean_length, 0.0);
    }

    #[test]
    fn test_stats_counts_dropped_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.fasta");
        fs::write(&path, "MK\n>h1\nGG\n").unwrap();

        let stats = FastaStats::from_path(&path).unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(stats.dropped_lines, 1);
    }
}
