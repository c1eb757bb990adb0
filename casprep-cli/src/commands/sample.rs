//! Sample command implementation - random subset of a FASTA file

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::sample_fasta;

use crate::config::Config;
use crate::deterministic::sampling_seed;
use crate::error::{require_file, CliError};

pub fn execute(
    config: &Config,
    deterministic: bool,
    input: PathBuf,
    out: PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    require_file(&input)?;
    super::ensure_distinct(&input, &out)?;

    let count = count.unwrap_or(config.sample.count);
    if count == 0 {
        return Err(CliError::invalid_argument("sample size must be at least 1").into());
    }
    let seed = sampling_seed(seed, deterministic, config);
    match seed {
        Some(seed) => log::info!("Selecting {} records from {} (seed {})", count, input.display(), seed),
        None => log::info!("Selecting {} records from {}", count, input.display()),
    }

    let summary = sample_fasta(&input, &out, count, seed)?;
    log::info!("Kept {} of {} records", summary.selected, summary.total);
    Ok(())
}
