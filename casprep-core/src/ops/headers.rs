//! Export header lines, one CSV per folder of FASTA files

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::OpsError;
use crate::io::{ensure_parent_dir, find_files, open_input};
use crate::types::HEADER_MARKER;

/// Write `headers_<folder>.csv` into `out_dir` for every folder below `root`
/// holding `*.<extension>` files. Each CSV has a single `Header` column with
/// the header lines as they appear in the files, marker included.
///
/// Folders are keyed by name, so same-named folders in different subtrees
/// share one CSV (with a warning) instead of overwriting each other.
///
/// Returns the CSV paths written.
pub fn extract_headers<P: AsRef<Path>, Q: AsRef<Path>>(root: P, out_dir: Q, extension: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let out_dir = out_dir.as_ref();

    if !root.is_dir() {
        return Err(OpsError::MissingDirectory(root.to_path_buf()).into());
    }

    let mut folders: BTreeMap<String, BTreeSet<PathBuf>> = BTreeMap::new();
    let mut files_by_folder: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for file in find_files(root, extension, true)? {
        let folder = file.parent().unwrap_or(root);
        let folder_name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string());
        folders.entry(folder_name.clone()).or_default().insert(folder.to_path_buf());
        files_by_folder.entry(folder_name).or_default().push(file);
    }

    for (folder_name, paths) in &folders {
        if paths.len() > 1 {
            log::warn!(
                "{} folders are named '{}', their headers share headers_{}.csv",
                paths.len(),
                folder_name,
                folder_name
            );
        }
    }

    let mut written = Vec::with_capacity(files_by_folder.len());
    for (folder_name, files) in &files_by_folder {
        let csv_path = out_dir.join(format!("headers_{}.csv", folder_name));
        ensure_parent_dir(&csv_path)?;

        let mut csv_writer = csv::Writer::from_path(&csv_path)
            .with_context(|| format!("Failed to create {}", csv_path.display()))?;
        csv_writer.write_record(["Header"])?;

        for file in files {
            for line in open_input(file)?.lines() {
                let line = line.with_context(|| format!("Failed to read {}", file.display()))?;
                if line.starts_with(HEADER_MARKER) {
                    csv_writer.write_record([line.trim()])?;
                }
            }
        }
        csv_writer.flush()?;

        log::info!("{} header CSV written", folder_name);
        written.push(csv_path);
    }

    Ok(written)
}
