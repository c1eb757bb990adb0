//! Format command implementation - rewrap sequences and tag headers

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::{format_fasta, FormatOptions};

use crate::config::Config;
use crate::error::{require_file, CliError};

pub fn execute(
    config: &Config,
    input: PathBuf,
    out: PathBuf,
    suffix: Option<String>,
    line_width: Option<usize>,
) -> Result<()> {
    require_file(&input)?;
    super::ensure_distinct(&input, &out)?;

    let options = FormatOptions {
        line_width: line_width.unwrap_or(config.format.line_width),
        header_suffix: suffix.unwrap_or_else(|| config.format.header_suffix.clone()),
    };
    if options.line_width == 0 {
        return Err(CliError::invalid_argument("--line-width must be at least 1").into());
    }

    log::info!(
        "Formatting {} (line width {}, header suffix '{}')",
        input.display(),
        options.line_width,
        options.header_suffix
    );
    let written = format_fasta(&input, &out, &options)?;
    log::info!("Formatted {} records", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        fs::write(&input, ">p\nMKVLA\n").unwrap();
        let out = dir.path().join("out.fasta");

        let mut config = Config::default();
        config.format.header_suffix = " | from-config".to_string();
        execute(&config, input, out.clone(), None, Some(2)).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), ">p | from-config\nMK\nVL\nA\n");
    }

    #[test]
    fn test_zero_width_flag_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        fs::write(&input, ">p\nMK\n").unwrap();

        let err = execute(&Config::default(), input, dir.path().join("o.fasta"), None, Some(0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::InvalidArgument { .. })));
    }
}
