//! Configuration handling for the casprep CLI
//!
//! Supports loading configuration from casprep.toml files with CLI argument overrides.

use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "casprep.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub count: CountConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub headers: HeadersConfig,
    #[serde(default)]
    pub sample: SampleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable deterministic mode for reproducible results
    #[serde(default)]
    pub deterministic: bool,

    /// Seed used in deterministic mode
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Append log lines to this file as well as stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountConfig {
    /// File extension scanned by count-dir
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Maximum characters per sequence line
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Text appended to every header line
    #[serde(default)]
    pub header_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// File extension of the files to merge
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into subdirectories
    #[serde(default = "default_true")]
    pub recursive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Header keyword (case-insensitive)
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Drop headers containing this text (case-insensitive), e.g. "-like"
    #[serde(default)]
    pub exclude: Option<String>,

    /// Keep only headers whose PE=<n> tag is at most this value
    #[serde(default)]
    pub max_pe: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadersConfig {
    /// File extension scanned by the headers command
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of records to keep
    #[serde(default = "default_sample_count")]
    pub count: usize,
}

// Default value functions
fn default_seed() -> u64 { casprep_core::ops::sample::DEFAULT_SEED }
fn default_extension() -> String { "fasta".to_string() }
fn default_line_width() -> usize { casprep_core::ops::format::DEFAULT_LINE_WIDTH }
fn default_true() -> bool { true }
fn default_keyword() -> String { "cas12".to_string() }
fn default_sample_count() -> usize { 400 }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            deterministic: false,
            seed: default_seed(),
            log_file: None,
        }
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self { extension: default_extension() }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            header_suffix: String::new(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            recursive: default_true(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            exclude: None,
            max_pe: None,
        }
    }
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self { extension: default_extension() }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { count: default_sample_count() }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => {
                // Try to find casprep.toml in current directory
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Reject values no command can work with
    pub fn validate(&self) -> Result<(), CliError> {
        if self.format.line_width == 0 {
            return Err(CliError::config("format.line_width must be at least 1"));
        }
        let extensions = [&self.count.extension, &self.merge.extension, &self.headers.extension];
        if extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(CliError::config("file extensions must not be empty"));
        }
        if self.filter.keyword.trim().is_empty() {
            return Err(CliError::config("filter.keyword must not be empty"));
        }
        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(CliError::from)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        let config = Self::default();
        let content = toml::to_string_pretty(&config).map_err(CliError::from)?;
        Ok(content)
    }
}
