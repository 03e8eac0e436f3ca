//! Command-line interface components.

use crate::config::SplitterConfig;
use crate::constants::{DEFAULT_ENTRY_PATTERN, DEFAULT_OUTPUT_DIR, LOG_TARGET};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abp-splitter")]
#[command(about = "Split OS AddressBase Premium ZIP archives into one CSV per record type")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the AddressBase Premium ZIP archive
    #[arg(value_name = "ARCHIVE")]
    pub archive_path: PathBuf,

    /// Output directory for the split CSV files (defaults to ./extracted)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only process archive entries whose name matches this glob pattern
    #[arg(long, value_name = "GLOB", default_value = DEFAULT_ENTRY_PATTERN)]
    pub entry_pattern: String,

    /// List the entries that would be processed, then exit without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Append to existing output files instead of replacing them
    #[arg(long)]
    pub keep_existing: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Get the output directory, defaulting to ./extracted
    pub fn get_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Build the splitter configuration from the command line
    pub fn to_config(&self) -> SplitterConfig {
        let mut config = SplitterConfig::default().with_entry_pattern(self.entry_pattern.clone());
        if self.dry_run {
            config = config.with_dry_run();
        }
        if self.no_progress {
            config = config.without_progress();
        }
        if self.keep_existing {
            config = config.keep_existing();
        }
        config
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        format!("{}={}", LOG_TARGET, level)
    }
}
