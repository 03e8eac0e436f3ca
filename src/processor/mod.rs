//! Main splitting engine.
//!
//! Orchestrates the AddressBase split: entry discovery, output
//! preparation, record streaming and the final summary.

pub mod classifier;
pub mod discovery;
pub mod streaming;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::ArchiveDiscovery, streaming::EntryStreamer, writer::OutputWriters};

use crate::config::SplitterConfig;
use crate::constants::SUMMARY_TIME_FORMAT;
use crate::error::{Result, SplitterError};
use crate::models::{ArchiveEntry, SplitStats, format_count};

use colored::*;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use tokio::fs;
use tokio::task;
use tracing::debug;
use zip::ZipArchive;

/// Main processor for AddressBase archive splitting
#[derive(Debug)]
pub struct SplitProcessor {
    archive_path: PathBuf,
    output_dir: PathBuf,
    config: SplitterConfig,
}

impl SplitProcessor {
    /// Create a new split processor
    pub fn new(archive_path: PathBuf, output_dir: PathBuf) -> Result<Self> {
        if !archive_path.exists() {
            return Err(SplitterError::ArchiveNotFound { path: archive_path });
        }

        Ok(Self {
            archive_path,
            output_dir,
            config: SplitterConfig::default(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: SplitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<SplitStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        println!(
            "{}",
            "Splitting OS AddressBase Premium CSV files by record identifier"
                .bright_green()
                .bold()
        );
        println!(
            "  {} {}",
            "Archive:".bright_cyan(),
            self.archive_path.display()
        );
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            self.output_dir.display()
        );

        // Step 1: Discover archive entries
        let mut discovery =
            ArchiveDiscovery::new(self.archive_path.clone(), self.config.entry_matcher()?);
        let (entries, entries_skipped) = task::spawn_blocking(move || {
            let entries = discovery.discover_entries()?;
            Ok::<_, SplitterError>((entries, discovery.skipped_entries()))
        })
        .await
        .map_err(|e| SplitterError::ProcessingFailed {
            reason: format!("entry discovery task failed: {}", e),
        })??;
        println!(
            "  {} {} entries",
            "Found".bright_green(),
            entries.len().to_string().bright_white().bold()
        );
        if entries_skipped > 0 {
            println!(
                "  {} {} entries not matching '{}'",
                "Skipping".bright_yellow(),
                entries_skipped.to_string().bright_white(),
                self.config.entry_pattern
            );
        }

        // Step 2: Handle dry run mode
        if self.config.dry_run {
            report_entries(&entries);
            return Ok(SplitStats {
                entries_skipped,
                output_dir: self.output_dir.clone(),
                processing_time_ms: start_time.elapsed().as_millis(),
                ..Default::default()
            });
        }

        // Step 3: Prepare output directory
        if fs::metadata(&self.output_dir).await.is_err() {
            println!("  {}", "Creating destination folder...".bright_yellow());
            fs::create_dir_all(&self.output_dir).await?;
        } else {
            debug!("Destination folder exists: {}", self.output_dir.display());
        }

        // Step 4: Split entries
        println!("\n{}", "Processing files...".bright_yellow());
        let archive_path = self.archive_path.clone();
        let output_dir = self.output_dir.clone();
        let config = self.config.clone();
        let mut stats = task::spawn_blocking(move || {
            split_archive(archive_path, output_dir, &entries, &config)
        })
        .await
        .map_err(|e| SplitterError::ProcessingFailed {
            reason: format!("split task failed: {}", e),
        })??;

        stats.entries_skipped = entries_skipped;
        stats.processing_time_ms = start_time.elapsed().as_millis();
        report_summary(&stats);

        Ok(stats)
    }
}

/// Split the given entries of an archive into per-type outputs
pub fn split_archive(
    archive_path: PathBuf,
    output_dir: PathBuf,
    entries: &[ArchiveEntry],
    config: &SplitterConfig,
) -> Result<SplitStats> {
    let file = File::open(&archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut writers = OutputWriters::create(&output_dir, config.remove_existing)?;

    let streamer = EntryStreamer::new(config.show_progress);
    let mut stats = streamer.split_entries(&mut archive, entries, &mut writers)?;

    stats.output_files = writers.finish()?;
    stats.output_dir = output_dir;
    Ok(stats)
}

fn report_entries(entries: &[ArchiveEntry]) {
    println!(
        "\n{}",
        "Dry run - entries that would be processed:".bright_green()
    );
    for entry in entries {
        println!(
            "  {} {}",
            entry.name.bright_white(),
            format!(
                "({} bytes, {} compressed)",
                format_count(entry.size),
                format_count(entry.compressed_size)
            )
            .bright_black()
        );
    }
}

fn report_summary(stats: &SplitStats) {
    println!("\n{}", "Splitting complete. Summary:".bright_green().bold());
    println!(
        "  {} {}",
        "Completed at".bright_cyan(),
        chrono::Local::now().format(SUMMARY_TIME_FORMAT)
    );
    println!(
        "  {} {:.1} minutes",
        "Elapsed time:".bright_cyan(),
        stats.processing_time_ms as f64 / 60_000.0
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.entries_processed.to_string().bright_white()
    );
    if stats.entries_skipped > 0 {
        println!(
            "  {} {}",
            "Entries skipped by pattern:".bright_cyan(),
            stats.entries_skipped.to_string().bright_white()
        );
    }

    for (record_type, count) in stats.counts.iter() {
        println!(
            "  Number of {}: {}",
            record_type.description(),
            format_count(count).bright_white().bold()
        );
    }

    if stats.unrecognised_rows > 0 {
        println!(
            "  {} {}",
            "Unrecognised rows skipped:".bright_red(),
            format_count(stats.unrecognised_rows).bright_red().bold()
        );
    }
}
