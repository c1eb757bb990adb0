//! Stats command implementation - summarise a FASTA file

use anyhow::{Context, Result};
use std::path::PathBuf;

use casprep_core::FastaStats;

use crate::error::require_file;

pub fn execute(input: PathBuf, json: bool) -> Result<()> {
    require_file(&input)?;
    let stats = FastaStats::from_path(&input)?;

    if json {
        let text = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{}", text);
        return Ok(());
    }

    println!("File: {}", input.display());
    println!("Records: {}", stats.records);
    println!("Total length: {}", stats.total_length);
    println!("Min/Max length: {}/{}", stats.min_length, stats.max_length);
    println!("Mean length: {:.1}", stats.mean_length);
    println!("Empty records: {}", stats.empty_records);
    println!("Distinct headers: {}", stats.distinct_headers);
    println!("Repeated headers: {}", stats.repeated_headers);
    println!("Duplicate header/sequence pairs: {}", stats.duplicate_pairs);
    if stats.dropped_lines > 0 {
        log::warn!("{} lines before the first header were ignored", stats.dropped_lines);
    }
    Ok(())
}
