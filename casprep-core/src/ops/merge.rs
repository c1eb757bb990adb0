//! Concatenate FASTA files from a directory

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::OpsError;
use crate::io::{create_output, find_files};

/// Append every `*.<extension>` file under `source` to `output`.
///
/// Subdirectories are included when `recursive` is set. The output file is
/// skipped if it lives inside `source`. A newline is inserted after any file
/// that does not end with one so records never run together. Returns the
/// number of files merged.
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
    extension: &str,
    recursive: bool,
) -> Result<usize> {
    let source = source.as_ref();
    let output = output.as_ref();

    if !source.is_dir() {
        return Err(OpsError::MissingDirectory(source.to_path_buf()).into());
    }

    let mut writer = create_output(output).with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let output_resolved = output.canonicalize()?;

    let files = find_files(source, extension, recursive)
        .with_context(|| format!("Failed to scan directory: {}", source.display()))?;

    let mut merged = 0;
    for file in &files {
        if file.canonicalize()? == output_resolved {
            continue;
        }
        let contents = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        writer.write_all(&contents)?;
        if !contents.is_empty() && !contents.ends_with(b"\n") {
            writer.write_all(b"\n")?;
        }
        merged += 1;
        log::debug!("Added {}", file.display());
    }
    writer.flush()?;

    log::info!("Files merged: {}", merged);
    log::info!("All files have been merged into {}", output.display());
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn layout() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.fasta"), ">a\nMK\n").unwrap();
        fs::write(root.join("b.fasta"), ">b\nGG").unwrap();
        fs::write(root.join("sub").join("c.fasta"), ">c\nPP\n").unwrap();
        fs::write(root.join("skip.txt"), "nope\n").unwrap();
        dir
    }

    #[test]
    fn test_merge_current_dir_only() {
        let dir = layout();
        let output = dir.path().join("merged").join("all.fasta");

        let merged = merge_files(dir.path(), &output, "fasta", false).unwrap();
        assert_eq!(merged, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), ">a\nMK\n>b\nGG\n");
    }

    #[test]
    fn test_merge_recursive_skips_output() {
        let dir = layout();
        let output = dir.path().join("merged.fasta");

        let merged = merge_files(dir.path(), &output, "fasta", true).unwrap();
        assert_eq!(merged, 3);
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains(">c\nPP\n"));
        assert!(!text.contains("nope"));
    }

    #[test]
    fn test_merge_missing_source() {
        let dir = tempdir().unwrap();
        let result = merge_files(dir.path().join("absent"), dir.path().join("out.fasta"), "fasta", true);
        assert!(result.is_err());
    }
}
