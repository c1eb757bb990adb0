//! Split command implementation - one FASTA file per header field

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::split_by_field;

use crate::error::require_file;

pub fn execute(input: PathBuf, out: PathBuf) -> Result<()> {
    require_file(&input)?;

    log::info!("Splitting {} by header field into {}", input.display(), out.display());
    let counts = split_by_field(&input, &out)?;
    for (field, records) in &counts {
        log::info!("  {}: {} records", field, records);
    }
    log::info!("Wrote {} files", counts.len());
    Ok(())
}
