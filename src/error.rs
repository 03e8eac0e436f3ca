//! Error handling for AddressBase splitting operations.
//!
//! Provides error types with context for archive access, record
//! decoding, and output file failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive not found at path: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("Failed to process archive entry {entry}: {reason}")]
    EntryFailed { entry: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing failed: {reason}")]
    ProcessingFailed { reason: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl SplitterError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Wrap a failure with the name of the archive entry being read
    pub fn entry_failed(entry: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::EntryFailed {
            entry: entry.into(),
            reason: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitterError>;
