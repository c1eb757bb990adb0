//! Duplicate tracker: header text -> (sequence text -> occurrence count)

use std::collections::HashMap;
use std::path::Path;

use crate::io::fasta::{FastaReader, FastaResult};
use crate::types::{HeaderGroup, Record};

/// Accumulates header and sequence occurrence counts for one input file.
///
/// Groups are stored in first-seen order with `index` mapping header text to
/// its slot in `groups`.
#[derive(Debug, Clone, Default)]
pub struct DuplicateTracker {
    groups: Vec<HeaderGroup>,
    index: HashMap<String, usize>,
    records: usize,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a single (header, sequence) pair.
    pub fn add(&mut self, header: &str, sequence: &str) {
        let slot = match self.index.get(header) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.groups.push(HeaderGroup::new(header));
                self.index.insert(header.to_string(), slot);
                slot
            }
        };
        self.groups[slot].add(sequence);
        self.records += 1;
    }

    pub fn add_record(&mut self, record: &Record) {
        self.add(&record.header, &record.sequence);
    }

    /// Drain a record stream into a fresh tracker, stopping at the first read error.
    pub fn from_records<I>(records: I) -> FastaResult<Self>
    where
        I: IntoIterator<Item = FastaResult<Record>>,
    {
        let mut tracker = Self::new();
        for record in records {
            tracker.add_record(&record?);
        }
        Ok(tracker)
    }

    /// Parse and count a FASTA file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> FastaResult<Self> {
        let path = path.as_ref();
        let reader = FastaReader::from_path(path)?;
        let tracker = Self::from_records(reader)?;
        log::debug!(
            "Counted {} records under {} distinct headers in {}",
            tracker.records(),
            tracker.distinct_headers(),
            path.display()
        );
        Ok(tracker)
    }

    pub fn group(&self, header: &str) -> Option<&HeaderGroup> {
        self.index.get(header).map(|&slot| &self.groups[slot])
    }

    pub fn groups(&self) -> impl Iterator<Item = &HeaderGroup> {
        self.groups.iter()
    }

    /// Total records counted.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn distinct_headers(&self) -> usize {
        self.groups.len()
    }

    /// (header, sequence) pairs that occur more than once.
    pub fn duplicate_pairs(&self) -> usize {
        self.groups.iter().map(|g| g.duplicated().count()).sum()
    }

    /// Headers that occur more than once, regardless of their sequences.
    pub fn repeated_headers(&self) -> usize {
        self.groups.iter().filter(|g| g.total() > 1).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn track(text: &str) -> DuplicateTracker {
        DuplicateTracker::from_records(FastaReader::new(Cursor::new(text))).unwrap()
    }

    #[test]
    fn test_counts_per_header_and_sequence() {
        let tracker = track(">h1\nAA\n>h1\nAA\n>h1\nCC\n>h2\nAA\n");

        assert_eq!(tracker.records(), 4);
        assert_eq!(tracker.distinct_headers(), 2);

        let h1 = tracker.group("h1").unwrap();
        assert_eq!(h1.total(), 3);
        assert_eq!(h1.count_of("AA"), 2);
        assert_eq!(h1.count_of("CC"), 1);

        // Same sequence under another header is a separate pair
        let h2 = tracker.group("h2").unwrap();
        assert_eq!(h2.total(), 1);
        assert_eq!(tracker.duplicate_pairs(), 1);
        assert_eq!(tracker.repeated_headers(), 1);
    }

    #[test]
    fn test_headers_in_first_seen_order() {
        let tracker = track(">b\nA\n>a\nA\n>b\nC\n");
        let headers: Vec<&str> = tracker.groups().map(|g| g.header()).collect();
        assert_eq!(headers, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_input() {
        let tracker = track("");
        assert!(tracker.is_empty());
        assert_eq!(tracker.groups().count(), 0);
    }

    #[test]
    fn test_group_totals_consistent() {
        let tracker = track(">x\nA\n>y\nB\n>x\nA\n>x\nB\n>y\nB\n");
        assert!(tracker.groups().all(|g| g.is_consistent()));
    }
}
