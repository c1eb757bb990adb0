//! Keep records whose header mentions a keyword

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::io::{create_output, open_input};
use crate::types::HEADER_MARKER;

/// Header tests applied by [`filter_by_keyword`]. All text matching is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Header must contain this.
    pub keyword: String,
    /// Header must not contain this, e.g. `-like`.
    pub exclude: Option<String>,
    /// Header must carry a UniProt `PE=<n>` tag with `n` at most this value.
    pub max_pe: Option<u32>,
}

impl FilterOptions {
    pub fn new<S: Into<String>>(keyword: S) -> Self {
        Self {
            keyword: keyword.into(),
            exclude: None,
            max_pe: None,
        }
    }

    fn accepts(&self, header_line: &str) -> bool {
        let lower = header_line.to_lowercase();
        if !lower.contains(&self.keyword.to_lowercase()) {
            return false;
        }
        if let Some(exclude) = &self.exclude {
            if lower.contains(&exclude.to_lowercase()) {
                return false;
            }
        }
        match self.max_pe {
            Some(limit) => protein_evidence(&lower).map_or(false, |pe| pe <= limit),
            None => true,
        }
    }
}

/// Value of the first `PE=<digits>` tag in a header, if any.
pub fn protein_evidence(header_line: &str) -> Option<u32> {
    let lower = header_line.to_lowercase();
    let start = lower.find("pe=")? + 3;
    let digits: String = lower[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub total: usize,
    pub kept: usize,
}

/// Copy records whose header line passes `options` from `input` to `output`.
///
/// Lines are copied unchanged, so the original wrapping survives. Lines
/// before the first header are not copied.
pub fn filter_by_keyword<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &FilterOptions,
) -> Result<FilterSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = open_input(input).with_context(|| format!("Failed to open FASTA file: {}", input.display()))?;
    let mut writer = create_output(output).with_context(|| format!("Failed to create output file: {}", output.display()))?;

    let mut summary = FilterSummary::default();
    let mut keep = false;
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", input.display()))?;
        if line.starts_with(HEADER_MARKER) {
            summary.total += 1;
            keep = options.accepts(&line);
            if keep {
                summary.kept += 1;
                log::debug!("{} written.", line.trim());
            }
        }
        if keep {
            writeln!(writer, "{}", line)?;
        }
    }
    writer.flush()?;

    log::info!("Kept {} of {} records matching '{}'", summary.kept, summary.total, options.keyword);
    Ok(summary)
}
