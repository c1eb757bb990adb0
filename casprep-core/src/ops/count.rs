//! Duplicate reports for a single file or a whole directory tree

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::OpsError;
use crate::io::find_files;
use crate::report::write_report_file;
use crate::tracker::DuplicateTracker;

#[derive(Debug, Clone, Serialize)]
pub struct CountSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub distinct_headers: usize,
    pub duplicate_pairs: usize,
    pub rows: usize,
}

/// Count headers and sequences of `input` and write the duplicate report to `output`.
pub fn count_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CountSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(OpsError::MissingFile(input.to_path_buf()).into());
    }

    let tracker = DuplicateTracker::from_path(input)
        .with_context(|| format!("Failed to read FASTA file: {}", input.display()))?;
    let rows = write_report_file(&tracker, output)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    Ok(CountSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: tracker.records(),
        distinct_headers: tracker.distinct_headers(),
        duplicate_pairs: tracker.duplicate_pairs(),
        rows,
    })
}

/// Report path for `file`: its location relative to `root`, re-rooted at
/// `out_dir`, with a `.csv` extension.
pub fn report_path_for(root: &Path, out_dir: &Path, file: &Path) -> PathBuf {
    let relative = file.strip_prefix(root).unwrap_or(file);
    out_dir.join(relative).with_extension("csv")
}

/// Write one report per `*.<extension>` file found below `root`.
pub fn count_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    out_dir: Q,
    extension: &str,
) -> Result<Vec<CountSummary>> {
    let root = root.as_ref();
    let out_dir = out_dir.as_ref();

    if !root.is_dir() {
        return Err(OpsError::MissingDirectory(root.to_path_buf()).into());
    }
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let files = find_files(root, extension, true)
        .with_context(|| format!("Failed to scan directory: {}", root.display()))?;
    log::info!("Processing {} FASTA files", files.len());

    let mut summaries = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", i + 1, files.len(), file.display());
        let report = report_path_for(root, out_dir, file);
        let summary = count_file(file, &report)?;
        log::info!("CSV written: {}", report.display());
        summaries.push(summary);
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_report_path_mirrors_layout() {
        let path = report_path_for(
            Path::new("/data/cleaned"),
            Path::new("/data/counts"),
            Path::new("/data/cleaned/ncbi/merged.fasta"),
        );
        assert_eq!(path, PathBuf::from("/data/counts/ncbi/merged.csv"));
    }

    #[test]
    fn test_count_file_summary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        fs::write(&input, ">h1\nAA\n>h1\nAA\n>h1\nCC\n>h2\nGG\n").unwrap();
        let output = dir.path().join("out").join("in.csv");

        let summary = count_file(&input, &output).unwrap();
        assert_eq!(summary.records, 4);
        assert_eq!(summary.distinct_headers, 2);
        assert_eq!(summary.duplicate_pairs, 1);
        assert_eq!(summary.rows, 3);
        assert!(output.exists());
    }

    #[test]
    fn test_count_file_missing_input() {
        let dir = tempdir().unwrap();
        let err = count_file(dir.path().join("absent.fasta"), dir.path().join("x.csv")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_count_directory_recurses() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("cleaned");
        fs::create_dir_all(root.join("uniprot")).unwrap();
        fs::write(root.join("ncbi.fasta"), ">a\nMK\n").unwrap();
        fs::write(root.join("uniprot").join("up.fasta"), ">b\nMK\n>b\nMK\n").unwrap();
        fs::write(root.join("readme.txt"), "ignored").unwrap();
        let out = dir.path().join("counts");

        let summaries = count_directory(&root, &out, "fasta").unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(out.join("ncbi.csv").exists());
        assert!(out.join("uniprot").join("up.csv").exists());
        assert!(!out.join("readme.csv").exists());
    }
}
