//! Split a FASTA file by the first `|`-delimited header field

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use crate::io::fasta::{FastaReader, FastaWriter};

/// First field enclosed by pipes, lower-cased. `None` if the header has no
/// such field.
pub fn field_of(pattern: &Regex, header: &str) -> Option<String> {
    pattern
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_lowercase())
        .filter(|field| !field.is_empty())
}

fn file_stem_for(field: &str) -> String {
    field
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Write one `<field>.fasta` per distinct header field into `out_dir`.
///
/// Records without a pipe-enclosed field or without sequence are skipped.
/// Returns the record count per field.
pub fn split_by_field<P: AsRef<Path>, Q: AsRef<Path>>(input: P, out_dir: Q) -> Result<BTreeMap<String, usize>> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();
    let pattern = Regex::new(r"\|([^|]+)\|")?;

    let mut groups: BTreeMap<String, Vec<_>> = BTreeMap::new();
    let mut skipped = 0usize;
    for record in FastaReader::from_path(input)? {
        let record = record.with_context(|| format!("Failed to read {}", input.display()))?;
        match field_of(&pattern, &record.header) {
            Some(field) if !record.is_empty() => groups.entry(field).or_default().push(record),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {} records without a header field or sequence", skipped);
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut counts = BTreeMap::new();
    for (field, records) in groups {
        let path = out_dir.join(format!("{}.fasta", file_stem_for(&field)));
        let mut writer = FastaWriter::create(&path)?;
        for record in &records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        log::debug!("Wrote {} records to {}", records.len(), path.display());
        counts.insert(field, records.len());
    }

    Ok(counts)
}
