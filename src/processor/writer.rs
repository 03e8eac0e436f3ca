//! CSV writing module for split AddressBase records
//!
//! Owns one CSV writer per record type. Every output starts with the
//! canonical header for its type and receives rows in the order they are
//! dispatched.

use crate::constants::{CSV_DELIMITER, CSV_QUOTE, CSV_TERMINATOR};
use crate::error::{Result, SplitterError};
use crate::schema::RecordType;

use csv::{ByteRecord, QuoteStyle, Terminator, Writer, WriterBuilder};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Set of open output files, one per record type
pub struct OutputWriters {
    output_dir: PathBuf,
    writers: BTreeMap<RecordType, Writer<BufWriter<File>>>,
}

impl std::fmt::Debug for OutputWriters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputWriters")
            .field("output_dir", &self.output_dir)
            .field("writers", &self.writers.len())
            .finish()
    }
}

impl OutputWriters {
    /// Open every output file and write its header
    ///
    /// With `remove_existing` any file left from a previous run is deleted
    /// first. Otherwise rows are appended to the existing file, and the
    /// header is only written when the file is empty.
    pub fn create(output_dir: &Path, remove_existing: bool) -> Result<Self> {
        fs::create_dir_all(output_dir)?;

        let mut writers = BTreeMap::new();
        for record_type in RecordType::ALL {
            let path = output_path(output_dir, record_type);
            if remove_existing && path.is_file() {
                debug!("Removing existing output: {}", path.display());
                fs::remove_file(&path)?;
            }

            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            let existing_len = file.metadata()?.len();
            if existing_len > 0 && !ends_with_newline(&path)? {
                file.write_all(&[CSV_TERMINATOR])?;
            }

            let mut writer = csv_writer(file);
            if existing_len == 0 {
                writer.write_record(record_type.header())?;
            } else {
                debug!("Appending to existing output: {}", path.display());
            }
            writers.insert(record_type, writer);
        }

        debug!(
            "Opened {} output files in {}",
            writers.len(),
            output_dir.display()
        );

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            writers,
        })
    }

    /// Append a record to the output for its type
    pub fn write(&mut self, record_type: RecordType, record: &ByteRecord) -> Result<()> {
        let writer = self
            .writers
            .get_mut(&record_type)
            .ok_or_else(|| SplitterError::ProcessingFailed {
                reason: format!("no output open for {}", record_type),
            })?;
        writer.write_byte_record(record)?;
        Ok(())
    }

    /// Flush and close every output, returning their paths in table order
    pub fn finish(self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(self.writers.len());
        for (record_type, mut writer) in self.writers {
            writer.flush()?;
            paths.push(output_path(&self.output_dir, record_type));
        }
        Ok(paths)
    }
}

/// Location of the output file for a record type
pub fn output_path(output_dir: &Path, record_type: RecordType) -> PathBuf {
    output_dir.join(record_type.file_name())
}

/// Check whether a non-empty file's last byte is the row terminator
fn ends_with_newline(path: &Path) -> Result<bool> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == CSV_TERMINATOR)
}

fn csv_writer(file: File) -> Writer<BufWriter<File>> {
    WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .quote(CSV_QUOTE)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(CSV_TERMINATOR))
        .flexible(true)
        .from_writer(BufWriter::new(file))
}
