//! File I/O for casprep
//!
//! Opening inputs (plain or gzip-compressed), creating outputs with their
//! parent directories, and locating FASTA files below a directory.

pub mod fasta;

pub use fasta::{FastaError, FastaReader, FastaWriter};

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Open a file for line reading, decompressing on the fly when the path ends in `.gz`.
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if path.to_string_lossy().ends_with(".gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create the directories leading up to `path` if they are missing.
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Create (truncate) an output file, making its parent directories first.
pub fn create_output<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    ensure_parent_dir(&path)?;
    Ok(BufWriter::new(File::create(path)?))
}

/// Collect files below `root` whose name ends in `.<extension>`.
///
/// Only the top level is scanned unless `recursive` is set. Symlinked
/// directories are never entered; symlinked files are collected. The result
/// is sorted so batch runs process files in a stable order.
pub fn find_files<P: AsRef<Path>>(root: P, extension: &str, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut found = Vec::new();
    let mut pending = vec![root.as_ref().to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            if file_type.is_dir() {
                if recursive {
                    pending.push(path);
                }
            } else if file_type.is_symlink() && path.is_dir() {
                log::debug!("Not following symlinked directory {}", path.display());
            } else if path
                .file_name()
                .map(|name| name.to_string_lossy().ends_with(&suffix))
                .unwrap_or(false)
            {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    #[test]
    fn test_open_gzipped_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fasta.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">h1\nMKV\n").unwrap();
        encoder.finish().unwrap();

        let mut text = String::new();
        open_input(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, ">h1\nMKV\n");
    }

    #[test]
    fn test_create_output_makes_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.csv");
        let mut writer = create_output(&path).unwrap();
        writeln!(writer, "x").unwrap();
        drop(writer);
        assert!(path.exists());
    }

    #[test]
    fn test_find_files_recursive_and_flat() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("a.fasta")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("sub").join("b.fasta")).unwrap();

        let flat = find_files(dir.path(), "fasta", false).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.fasta")]);

        let all = find_files(dir.path(), ".fasta", true).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&dir.path().join("sub").join("b.fasta")));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_ignores_directory_symlink_cycle() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        File::create(sub.join("a.fasta")).unwrap();
        std::os::unix::fs::symlink(dir.path(), sub.join("loop")).unwrap();

        let found = find_files(dir.path(), "fasta", true).unwrap();
        assert_eq!(found, vec![sub.join("a.fasta")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_keeps_symlinked_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, ">a\nMK\n").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.fasta")).unwrap();

        let found = find_files(dir.path(), "fasta", false).unwrap();
        assert_eq!(found, vec![dir.path().join("link.fasta")]);
    }
}
