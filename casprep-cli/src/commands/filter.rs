//! Filter command implementation - keep records by header keyword

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::{filter_by_keyword, FilterOptions};

use crate::config::Config;
use crate::error::{require_file, CliError};

pub fn execute(
    config: &Config,
    input: PathBuf,
    out: PathBuf,
    keyword: Option<String>,
    exclude: Option<String>,
    max_pe: Option<u32>,
) -> Result<()> {
    require_file(&input)?;
    super::ensure_distinct(&input, &out)?;

    let options = FilterOptions {
        keyword: keyword.unwrap_or_else(|| config.filter.keyword.clone()),
        exclude: exclude.or_else(|| config.filter.exclude.clone()),
        max_pe: max_pe.or(config.filter.max_pe),
    };
    if options.keyword.trim().is_empty() {
        return Err(CliError::invalid_argument("keyword must not be empty").into());
    }

    log::info!("Filtering {} for headers containing '{}'", input.display(), options.keyword);
    if let Some(exclude) = &options.exclude {
        log::info!("Excluding headers containing '{}'", exclude);
    }
    if let Some(max_pe) = options.max_pe {
        log::info!("Requiring protein evidence PE <= {}", max_pe);
    }

    let summary = filter_by_keyword(&input, &out, &options)?;
    log::info!("Filtered FASTA written to {} ({} records)", out.display(), summary.kept);
    Ok(())
}
