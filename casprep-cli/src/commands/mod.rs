//! Command implementations for the casprep CLI

#[cfg(feature = "count")] pub mod count;
#[cfg(feature = "format")] pub mod format;
#[cfg(feature = "merge")] pub mod merge;
#[cfg(feature = "filter")] pub mod filter;
#[cfg(feature = "headers")] pub mod headers;
#[cfg(feature = "sample")] pub mod sample;
#[cfg(feature = "split")] pub mod split;
#[cfg(feature = "stats")] pub mod stats;
pub mod config;

use chrono::{DateTime, Local};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Refuse to write a file over the input it is being read from.
pub fn ensure_distinct(input: &Path, output: &Path) -> CliResult<()> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if same {
        return Err(CliError::output_is_input(output.to_path_buf()));
    }
    Ok(())
}

/// Wall-clock timing of one command, reported when it finishes
pub struct RunTimer {
    name: &'static str,
    started: DateTime<Local>,
}

impl RunTimer {
    pub fn start(name: &'static str) -> Self {
        let started = Local::now();
        log::debug!("{} started at {}", name, started.format("%Y-%m-%d %H:%M:%S"));
        Self { name, started }
    }

    pub fn finish(self) {
        let ended = Local::now();
        let elapsed = (ended - self.started).num_seconds().max(0) as u64;
        log::info!("Start Time: {}", self.started.format("%Y-%m-%d %H:%M:%S"));
        log::info!("End Time: {}", ended.format("%Y-%m-%d %H:%M:%S"));
        log::info!("Finished {} in {}", self.name, format_elapsed(elapsed));
    }
}

/// Render seconds as `hh:mm:ss`.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.fasta");
        std::fs::write(&input, ">a\nMK\n").unwrap();

        assert!(ensure_distinct(&input, &dir.path().join("out.fasta")).is_ok());
        assert!(matches!(
            ensure_distinct(&input, &dir.path().join(".").join("in.fasta")),
            Err(CliError::OutputIsInput { .. })
        ));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3600 * 27 + 5), "27:00:05");
    }
}
