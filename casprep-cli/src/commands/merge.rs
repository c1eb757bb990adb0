//! Merge command implementation - concatenate FASTA files

use anyhow::Result;
use std::path::PathBuf;

use casprep_core::ops::merge_files;

use crate::config::Config;
use crate::error::require_dir;

pub fn execute(
    config: &Config,
    input: PathBuf,
    out: PathBuf,
    extension: Option<String>,
    recursive: bool,
    flat: bool,
) -> Result<()> {
    require_dir(&input)?;
    let extension = extension.unwrap_or_else(|| config.merge.extension.clone());
    let recursive = if recursive {
        true
    } else if flat {
        false
    } else {
        config.merge.recursive
    };

    log::info!(
        "Merging *.{} files from {}{}",
        extension,
        input.display(),
        if recursive { " and its subdirectories" } else { "" }
    );
    let merged = merge_files(&input, &out, &extension, recursive)?;
    if merged == 0 {
        log::warn!("No *.{} files found in {}", extension, input.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_flat_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir_all(input.join("sub")).unwrap();
        fs::write(input.join("a.fasta"), ">a\nMK\n").unwrap();
        fs::write(input.join("sub").join("b.fasta"), ">b\nGG\n").unwrap();
        let out = dir.path().join("merged.fasta");

        execute(&Config::default(), input, out.clone(), None, false, true).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), ">a\nMK\n");
    }
}
