//! Random subset selection

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;

use super::OpsError;
use crate::io::fasta::{read_records, FastaWriter};
use crate::ops::format::DEFAULT_LINE_WIDTH;
use crate::types::Record;

/// Seed used when a reproducible selection is requested without an explicit seed.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleSummary {
    pub total: usize,
    pub selected: usize,
}

/// Pick `count` records without replacement, keeping their input order.
///
/// With fewer than `count` records available, all of them are returned.
pub fn sample_records(records: Vec<Record>, count: usize, rng: &mut StdRng) -> Vec<Record> {
    if records.len() <= count {
        return records;
    }

    let mut picked = rand::seq::index::sample(rng, records.len(), count).into_vec();
    picked.sort_unstable();

    let mut slots: Vec<Option<Record>> = records.into_iter().map(Some).collect();
    picked.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Write a random subset of `input` to `output`.
///
/// `seed` makes the selection reproducible; without it the generator is
/// seeded from the operating system.
pub fn sample_fasta<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    count: usize,
    seed: Option<u64>,
) -> Result<SampleSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    if count == 0 {
        return Err(OpsError::InvalidArgument("sample size must be at least 1".to_string()).into());
    }

    let records = read_records(input).with_context(|| format!("Failed to read FASTA file: {}", input.display()))?;
    let total = records.len();
    log::info!("Total sequences in input file: {}", total);

    if total < count {
        log::warn!("Only {} sequences available, selecting all of them", total);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let selected = sample_records(records, count, &mut rng);

    let mut writer = FastaWriter::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?
        .with_line_width(DEFAULT_LINE_WIDTH)?;
    for record in &selected {
        writer.write_record(record)?;
    }
    writer.flush()?;

    log::info!("Selected sequences written to: {}", output.display());
    Ok(SampleSummary {
        total,
        selected: selected.len(),
    })
}
