//! Application constants for the AddressBase splitter
//!
//! This module contains default values, CSV dialect settings and display
//! formats used throughout the splitter.

// =============================================================================
// Paths and Entry Selection
// =============================================================================

/// Output directory used when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = "extracted";

/// Glob pattern applied to archive entry names (every file by default)
pub const DEFAULT_ENTRY_PATTERN: &str = "*";

// =============================================================================
// CSV Dialect
// =============================================================================

pub const CSV_DELIMITER: u8 = b',';
pub const CSV_QUOTE: u8 = b'"';
pub const CSV_TERMINATOR: u8 = b'\n';

/// Number of leading bytes of the first field that identify the record type
pub const RECORD_IDENTIFIER_LEN: usize = 2;

/// UTF-8 byte order mark, occasionally present at the start of an entry
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// =============================================================================
// Display
// =============================================================================

pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}";

pub const PROGRESS_CHARS: &str = "#>-";

/// Timestamp format for the completion line of the summary
pub const SUMMARY_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Crate name used as the default tracing filter target
pub const LOG_TARGET: &str = "abp_splitter";
