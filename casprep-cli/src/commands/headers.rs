//! Headers command implementation - export header lines per folder

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::extract_headers;

use crate::config::Config;
use crate::error::require_dir;

pub fn execute(config: &Config, input: PathBuf, out: PathBuf, extension: Option<String>) -> Result<()> {
    require_dir(&input)?;
    let extension = extension.unwrap_or_else(|| config.headers.extension.clone());

    log::info!("Extracting headers from *.{} files below {}", extension, input.display());
    let written = extract_headers(&input, &out, &extension)?;
    log::info!("Wrote {} header CSV files to {}", written.len(), out.display());
    Ok(())
}
