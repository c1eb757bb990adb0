use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marker character that opens every FASTA header line.
pub const HEADER_MARKER: char = '>';

/// A single FASTA entry: header text (marker stripped, trimmed) and the
/// concatenated sequence lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub header: String,
    pub sequence: String,
}

impl Record {
    pub fn new<H: Into<String>, S: Into<String>>(header: H, sequence: S) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Header line as it appears in a file, marker included.
    pub fn header_line(&self) -> String {
        format!("{}{}", HEADER_MARKER, self.header)
    }
}

/// How often one distinct sequence occurred under a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCount {
    pub sequence: String,
    pub count: usize,
}

impl SequenceCount {
    pub fn is_duplicate(&self) -> bool {
        self.count > 1
    }
}

/// All records of one file sharing an identical header.
///
/// Sequences are kept in first-seen order; `index` maps sequence text to
/// its slot in `sequences`.
#[derive(Debug, Clone, Default)]
pub struct HeaderGroup {
    header: String,
    total: usize,
    sequences: Vec<SequenceCount>,
    index: HashMap<String, usize>,
}

impl HeaderGroup {
    pub fn new<H: Into<String>>(header: H) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Count one more occurrence of `sequence` under this header.
    pub fn add(&mut self, sequence: &str) {
        self.total += 1;
        match self.index.get(sequence) {
            Some(&slot) => self.sequences[slot].count += 1,
            None => {
                self.index.insert(sequence.to_string(), self.sequences.len());
                self.sequences.push(SequenceCount {
                    sequence: sequence.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Number of times the header occurred in the file.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct sequences seen under the header.
    pub fn distinct(&self) -> usize {
        self.sequences.len()
    }

    pub fn count_of(&self, sequence: &str) -> usize {
        self.index
            .get(sequence)
            .map(|&slot| self.sequences[slot].count)
            .unwrap_or(0)
    }

    pub fn sequences(&self) -> impl Iterator<Item = &SequenceCount> {
        self.sequences.iter()
    }

    pub fn duplicated(&self) -> impl Iterator<Item = &SequenceCount> {
        self.sequences.iter().filter(|s| s.is_duplicate())
    }

    /// Per-sequence counts add up to the header total.
    pub fn is_consistent(&self) -> bool {
        self.sequences.iter().map(|s| s.count).sum::<usize>() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_restores_marker() {
        let record = Record::new("sp|Q99ZW2|CAS9", "MDKK");
        assert_eq!(record.header_line(), ">sp|Q99ZW2|CAS9");
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_group_counts_and_order() {
        let mut group = HeaderGroup::new("h1");
        group.add("CC");
        group.add("AA");
        group.add("CC");

        assert_eq!(group.total(), 3);
        assert_eq!(group.distinct(), 2);
        assert_eq!(group.count_of("CC"), 2);
        assert_eq!(group.count_of("GG"), 0);

        let order: Vec<&str> = group.sequences().map(|s| s.sequence.as_str()).collect();
        assert_eq!(order, vec!["CC", "AA"]);
        assert_eq!(group.duplicated().count(), 1);
        assert!(group.is_consistent());
    }

    #[test]
    fn test_empty_sequence_is_counted() {
        let mut group = HeaderGroup::new("orphan");
        group.add("");
        group.add("");
        assert_eq!(group.count_of(""), 2);
        assert!(group.is_consistent());
    }
}
