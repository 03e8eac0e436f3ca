//! Streaming split module for AddressBase archives
//!
//! Reads each selected archive entry as CSV, classifies every record and
//! hands it to the matching output writer. Entries are handled one at a
//! time in archive order.

use super::classifier::{Classification, classify};
use super::discovery::is_csv_entry;
use super::writer::OutputWriters;
use crate::constants::{CSV_DELIMITER, CSV_QUOTE, PROGRESS_CHARS, PROGRESS_TEMPLATE};
use crate::error::{Result, SplitterError};
use crate::models::{ArchiveEntry, EntryStats, SplitStats};

use csv::{ByteRecord, ReaderBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Read, Seek};
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Streams records from archive entries into the output writers
#[derive(Debug)]
pub struct EntryStreamer {
    show_progress: bool,
}

impl EntryStreamer {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Split every entry into the writers, in the order given
    pub fn split_entries<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        entries: &[ArchiveEntry],
        writers: &mut OutputWriters,
    ) -> Result<SplitStats> {
        let pb = self.progress_bar(entries.len());
        let mut stats = SplitStats::default();

        for entry in entries {
            pb.set_message(entry.name.clone());
            info!("Processing: {}", entry.name);
            if !is_csv_entry(&entry.name) {
                warn!("Entry {} does not have a .csv extension", entry.name);
            }

            let entry_stats = self.split_entry(archive, entry, writers)?;
            debug!(
                "Finished {}: {} rows read, {} written, {} unrecognised, {} blank",
                entry.name,
                entry_stats.rows_read,
                entry_stats.rows_written(),
                entry_stats.unrecognised_rows,
                entry_stats.blank_rows
            );

            stats.absorb(&entry_stats);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(stats)
    }

    /// Split a single archive entry
    pub fn split_entry<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        entry: &ArchiveEntry,
        writers: &mut OutputWriters,
    ) -> Result<EntryStats> {
        let member = archive
            .by_index(entry.index)
            .map_err(|e| SplitterError::entry_failed(&entry.name, e))?;
        split_reader(member, writers).map_err(|e| match e {
            SplitterError::Csv(source) => SplitterError::entry_failed(&entry.name, source),
            other => other,
        })
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            pb.set_style(style.progress_chars(PROGRESS_CHARS));
        }
        pb
    }
}

/// Route every record read from `reader` to the writers
pub fn split_reader<R: Read>(reader: R, writers: &mut OutputWriters) -> Result<EntryStats> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(CSV_DELIMITER)
        .quote(CSV_QUOTE)
        .from_reader(reader);

    let mut stats = EntryStats::default();
    let mut record = ByteRecord::new();

    while rdr.read_byte_record(&mut record)? {
        stats.rows_read += 1;
        match classify(&record) {
            Classification::Known(record_type) => {
                writers.write(record_type, &record)?;
                stats.counts.increment(record_type);
            }
            Classification::Unrecognised => {
                stats.unrecognised_rows += 1;
                debug!(
                    "Skipping unrecognised record at line {}",
                    record.position().map_or(0, |p| p.line())
                );
            }
            Classification::Blank => stats.blank_rows += 1,
        }
    }

    if stats.unrecognised_rows > 0 {
        warn!("Skipped {} unrecognised records", stats.unrecognised_rows);
    }

    Ok(stats)
}
