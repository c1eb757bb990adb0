use clap::{Parser, Subcommand};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};

mod config;
mod commands;
mod deterministic;
mod error;

use config::Config;
use commands::RunTimer;
use error::CliError;

#[derive(Parser)]
#[command(name = "casprep")]
#[command(about = "casprep - FASTA curation steps for Cas protein datasets")]
#[command(version)]
#[command(long_about = "
casprep bundles the small FASTA preparation steps used while curating a
protein sequence dataset: duplicate reports, reformatting, filtering,
merging, header export, sampling, splitting and summaries.

Examples:
  casprep count --input cas12.fasta --out reports/cas12.csv
  casprep count-dir --input downloads/ --out reports/
  casprep format --input cas12k.fasta --out cas12k.fmt.fasta --suffix ' | subtype=cas12k'
  casprep sample --input cas12.fasta --out subset.fasta -n 400 --seed 7
  casprep stats --input cas12.fasta --json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable deterministic mode for reproducible results
    #[arg(long, global = true)]
    pub deterministic: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report duplicated header/sequence pairs of one FASTA file as CSV
    #[cfg(feature = "count")]
    Count {
        /// Input FASTA file (optionally .gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV report
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Write one duplicate report per FASTA file found below a directory
    #[cfg(feature = "count")]
    CountDir {
        /// Directory searched recursively
        #[arg(short, long)]
        input: PathBuf,

        /// Directory receiving the reports
        #[arg(short, long)]
        out: PathBuf,

        /// File extension to look for
        #[arg(long)]
        extension: Option<String>,
    },

    /// Rewrap sequence lines and append a suffix to each header
    #[cfg(feature = "format")]
    Format {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Output FASTA file
        #[arg(short, long)]
        out: PathBuf,

        /// Text appended to every header line
        #[arg(long)]
        suffix: Option<String>,

        /// Maximum characters per sequence line
        #[arg(long)]
        line_width: Option<usize>,
    },

    /// Concatenate every FASTA file of a directory into one file
    #[cfg(feature = "merge")]
    Merge {
        /// Directory holding the files to merge
        #[arg(short, long)]
        input: PathBuf,

        /// Merged FASTA file
        #[arg(short, long)]
        out: PathBuf,

        /// File extension to look for
        #[arg(long)]
        extension: Option<String>,

        /// Descend into subdirectories
        #[arg(long, conflicts_with = "flat")]
        recursive: bool,

        /// Only merge files directly inside the input directory
        #[arg(long)]
        flat: bool,
    },

    /// Keep records whose header contains a keyword (case-insensitive)
    #[cfg(feature = "filter")]
    Filter {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Output FASTA file
        #[arg(short, long)]
        out: PathBuf,

        /// Header keyword
        #[arg(short, long)]
        keyword: Option<String>,

        /// Drop headers containing this text, e.g. --exclude=-like
        #[arg(long, allow_hyphen_values = true)]
        exclude: Option<String>,

        /// Keep only headers with a PE=<n> tag where n is at most this value
        #[arg(long)]
        max_pe: Option<u32>,
    },

    /// Export header lines to one headers_<folder>.csv per folder
    #[cfg(feature = "headers")]
    Headers {
        /// Directory searched recursively
        #[arg(short, long)]
        input: PathBuf,

        /// Directory receiving the CSV files
        #[arg(short, long)]
        out: PathBuf,

        /// File extension to look for
        #[arg(long)]
        extension: Option<String>,
    },

    /// Select a random subset of records, kept in input order
    #[cfg(feature = "sample")]
    Sample {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Output FASTA file
        #[arg(short, long)]
        out: PathBuf,

        /// Number of records to keep
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write one FASTA file per |field| found in the headers
    #[cfg(feature = "split")]
    Split {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Summarise records, lengths and duplicates of a FASTA file
    #[cfg(feature = "stats")]
    Stats {
        /// Input FASTA file
        #[arg(short, long)]
        input: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print or write a configuration file
    Config {
        /// Use built-in defaults instead of the loaded configuration
        #[arg(long)]
        example: bool,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Duplicates log output to stderr and an appended log file
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()?;
        self.file.flush()
    }
}

fn setup_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.format_timestamp_secs();

    if let Some(path) = log_file {
        casprep_core::io::ensure_parent_dir(path)
            .with_context(|| format!("Failed to create log directory for {}", path.display()))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init().context("Failed to initialise logging")?;
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configuration first so general.log_file can feed the logger
    let config = Config::load(cli.config.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| config.general.log_file.clone());
    setup_logging(cli.verbose, cli.quiet, log_file.as_deref())?;

    match cli.command {
        #[cfg(feature = "count")]
        Commands::Count { input, out } => {
            let timer = RunTimer::start("count");
            commands::count::execute(input, out)?;
            timer.finish();
        }

        #[cfg(feature = "count")]
        Commands::CountDir { input, out, extension } => {
            let timer = RunTimer::start("count-dir");
            commands::count::execute_dir(&config, input, out, extension)?;
            timer.finish();
        }

        #[cfg(feature = "format")]
        Commands::Format { input, out, suffix, line_width } => {
            let timer = RunTimer::start("format");
            commands::format::execute(&config, input, out, suffix, line_width)?;
            timer.finish();
        }

        #[cfg(feature = "merge")]
        Commands::Merge { input, out, extension, recursive, flat } => {
            let timer = RunTimer::start("merge");
            commands::merge::execute(&config, input, out, extension, recursive, flat)?;
            timer.finish();
        }

        #[cfg(feature = "filter")]
        Commands::Filter { input, out, keyword, exclude, max_pe } => {
            let timer = RunTimer::start("filter");
            commands::filter::execute(&config, input, out, keyword, exclude, max_pe)?;
            timer.finish();
        }

        #[cfg(feature = "headers")]
        Commands::Headers { input, out, extension } => {
            let timer = RunTimer::start("headers");
            commands::headers::execute(&config, input, out, extension)?;
            timer.finish();
        }

        #[cfg(feature = "sample")]
        Commands::Sample { input, out, count, seed } => {
            let timer = RunTimer::start("sample");
            commands::sample::execute(&config, cli.deterministic, input, out, count, seed)?;
            timer.finish();
        }

        #[cfg(feature = "split")]
        Commands::Split { input, out } => {
            let timer = RunTimer::start("split");
            commands::split::execute(input, out)?;
            timer.finish();
        }

        #[cfg(feature = "stats")]
        Commands::Stats { input, json } => {
            commands::stats::execute(input, json)?;
        }

        Commands::Config { example, out } => {
            commands::config::execute(&config, example, out)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => error::print_error_and_exit(cli_err),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
