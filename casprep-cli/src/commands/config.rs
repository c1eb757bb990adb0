//! Config command implementation - print or write a configuration template

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub fn execute(config: &Config, example: bool, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            if example {
                Config::default().save_to_file(&path)?;
            } else {
                config.save_to_file(&path)?;
            }
            log::info!("Configuration written to {}", path.display());
        }
        None => {
            let content = if example {
                Config::example_toml()?
            } else {
                toml::to_string_pretty(config)?
            };
            print!("{}", content);
        }
    }
    Ok(())
}
