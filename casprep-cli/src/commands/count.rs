//! Count command implementation - duplicate header/sequence reports

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::{count_directory, count_file};

use crate::config::Config;
use crate::error::{require_dir, require_file};

/// Report duplicates for a single FASTA file.
pub fn execute(input: PathBuf, out: PathBuf) -> Result<()> {
    log::info!("Counting headers and sequences in {}", input.display());
    require_file(&input)?;
    super::ensure_distinct(&input, &out)?;

    let summary = count_file(&input, &out)?;

    log::info!(
        "{} records, {} distinct headers, {} duplicated header/sequence pairs",
        summary.records,
        summary.distinct_headers,
        summary.duplicate_pairs
    );
    log::info!("CSV written: {} ({} rows)", summary.output.display(), summary.rows);
    Ok(())
}

/// Report duplicates for every FASTA file below a directory.
pub fn execute_dir(config: &Config, input: PathBuf, out: PathBuf, extension: Option<String>) -> Result<()> {
    require_dir(&input)?;
    let extension = extension.unwrap_or_else(|| config.count.extension.clone());
    log::info!("Scanning {} for *.{} files", input.display(), extension);

    let summaries = count_directory(&input, &out, &extension)?;

    let with_duplicates = summaries.iter().filter(|s| s.duplicate_pairs > 0).count();
    log::info!(
        "Wrote {} reports to {} ({} files contain duplicates)",
        summaries.len(),
        out.display(),
        with_duplicates
    );
    Ok(())
}
