//! Core data structures for AddressBase splitting.
//!
//! Defines archive entries, per-type record counters and the processing
//! statistics returned by the splitter.

use crate::schema::RecordType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A file member of the input archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Position of the entry in the archive's central directory
    pub index: usize,
    pub name: String,
    pub compressed_size: u64,
    pub size: u64,
}

/// Number of rows written per record type
///
/// Iteration follows `RecordType` order, which is also the order used for
/// output files and the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    counts: BTreeMap<RecordType, u64>,
}

impl RecordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, record_type: RecordType) {
        *self.counts.entry(record_type).or_insert(0) += 1;
    }

    pub fn get(&self, record_type: RecordType) -> u64 {
        self.counts.get(&record_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Add every count from `other` into this set
    pub fn merge(&mut self, other: &RecordCounts) {
        for (record_type, count) in &other.counts {
            *self.counts.entry(*record_type).or_insert(0) += count;
        }
    }

    /// Counts for every record type, including types that were never seen
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, u64)> + '_ {
        RecordType::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

/// Statistics for a single archive entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStats {
    pub rows_read: u64,
    pub blank_rows: u64,
    pub unrecognised_rows: u64,
    pub counts: RecordCounts,
}

impl EntryStats {
    pub fn rows_written(&self) -> u64 {
        self.counts.total()
    }
}

/// Processing statistics for a whole archive
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SplitStats {
    pub entries_processed: usize,
    /// File entries excluded by the entry pattern
    pub entries_skipped: usize,
    pub rows_read: u64,
    pub blank_rows: u64,
    pub unrecognised_rows: u64,
    pub counts: RecordCounts,
    pub output_dir: PathBuf,
    pub output_files: Vec<PathBuf>,
    pub processing_time_ms: u128,
}

impl SplitStats {
    pub fn rows_written(&self) -> u64 {
        self.counts.total()
    }

    /// Fold the result of one entry into the archive totals
    pub fn absorb(&mut self, entry: &EntryStats) {
        self.entries_processed += 1;
        self.rows_read += entry.rows_read;
        self.blank_rows += entry.blank_rows;
        self.unrecognised_rows += entry.unrecognised_rows;
        self.counts.merge(&entry.counts);
    }
}

/// Format a count with comma thousands separators
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
