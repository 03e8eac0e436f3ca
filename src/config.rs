//! Configuration management and validation.
//!
//! Provides the settings that control which archive entries are split,
//! how existing outputs are treated and how progress is reported.

use crate::constants::DEFAULT_ENTRY_PATTERN;
use crate::error::{Result, SplitterError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for AddressBase splitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Glob pattern an archive entry name must match to be processed
    pub entry_pattern: String,

    /// Show a progress bar while entries are processed
    pub show_progress: bool,

    /// List the entries that would be processed and exit without writing
    pub dry_run: bool,

    /// Delete output files left over from a previous run before writing
    pub remove_existing: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            entry_pattern: DEFAULT_ENTRY_PATTERN.to_string(),
            show_progress: true,
            dry_run: false,
            remove_existing: true,
        }
    }
}

impl SplitterConfig {
    /// Restrict processing to entries matching a glob pattern
    pub fn with_entry_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.entry_pattern = pattern.into();
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Enable dry run mode
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Keep existing output files and append to them
    pub fn keep_existing(mut self) -> Self {
        self.remove_existing = false;
        self
    }

    /// Compile the entry pattern
    pub fn entry_matcher(&self) -> Result<glob::Pattern> {
        glob::Pattern::new(&self.entry_pattern).map_err(|e| {
            SplitterError::configuration(format!(
                "invalid entry pattern '{}': {}",
                self.entry_pattern, e
            ))
        })
    }

    /// Check the configuration before any work is done
    pub fn validate(&self) -> Result<()> {
        if self.entry_pattern.trim().is_empty() {
            return Err(SplitterError::configuration("entry pattern must not be empty"));
        }
        self.entry_matcher()?;
        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
