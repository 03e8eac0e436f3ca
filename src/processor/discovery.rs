//! Entry discovery module for AddressBase archives
//!
//! Lists the file members of a ZIP archive that should be split, in the
//! order they appear in the archive.

use crate::error::{Result, SplitterError};
use crate::models::ArchiveEntry;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// Entry discovery component for AddressBase archives
#[derive(Debug)]
pub struct ArchiveDiscovery {
    archive_path: PathBuf,
    pattern: glob::Pattern,
    skipped_entries: usize,
}

impl ArchiveDiscovery {
    /// Create a new discovery instance
    pub fn new(archive_path: PathBuf, pattern: glob::Pattern) -> Self {
        Self {
            archive_path,
            pattern,
            skipped_entries: 0,
        }
    }

    /// Number of file entries that did not match the entry pattern
    pub fn skipped_entries(&self) -> usize {
        self.skipped_entries
    }

    /// Open the archive and list matching file entries
    pub fn discover_entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        if !self.archive_path.exists() {
            return Err(SplitterError::ArchiveNotFound {
                path: self.archive_path.clone(),
            });
        }

        let file = File::open(&self.archive_path)?;
        let mut archive = ZipArchive::new(file)?;
        self.discover_in(&mut archive)
    }

    /// List matching file entries of an already opened archive
    pub fn discover_in<R: Read + Seek>(
        &mut self,
        archive: &mut ZipArchive<R>,
    ) -> Result<Vec<ArchiveEntry>> {
        debug!(
            "Scanning {} archive members in {}",
            archive.len(),
            self.archive_path.display()
        );

        let mut entries = Vec::new();
        self.skipped_entries = 0;

        for index in 0..archive.len() {
            let member = archive.by_index(index)?;
            if member.is_dir() {
                continue;
            }

            let name = member.name().to_string();
            if !self.pattern.matches(&name) {
                debug!("Skipping entry not matching pattern: {}", name);
                self.skipped_entries += 1;
                continue;
            }

            entries.push(ArchiveEntry {
                index,
                name,
                compressed_size: member.compressed_size(),
                size: member.size(),
            });
        }

        debug!(
            "Found {} entries to process ({} skipped)",
            entries.len(),
            self.skipped_entries
        );

        Ok(entries)
    }
}

/// Check if an entry name looks like a CSV file
pub fn is_csv_entry(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    /// Helper to create a test archive with a directory and mixed members
    fn create_test_archive(temp_dir: &TempDir) -> PathBuf {
        let archive_path = temp_dir.path().join("abp.zip");
        let file = File::create(&archive_path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        zip.add_directory("data/", options).unwrap();
        zip.start_file("data/part_001.csv", options).unwrap();
        zip.write_all(b"10,ORDNANCE SURVEY\n").unwrap();
        zip.start_file("data/part_002.csv", options).unwrap();
        zip.write_all(b"99,0,1\n").unwrap();
        zip.start_file("readme.txt", options).unwrap();
        zip.write_all(b"not records").unwrap();
        zip.finish().unwrap();

        archive_path
    }

    fn pattern(p: &str) -> glob::Pattern {
        glob::Pattern::new(p).unwrap()
    }

    #[test]
    fn test_discover_all_file_entries() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = create_test_archive(&temp_dir);

        let mut discovery = ArchiveDiscovery::new(archive_path, pattern("*"));
        let entries = discovery.discover_entries().unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["data/part_001.csv", "data/part_002.csv", "readme.txt"]);
        assert_eq!(discovery.skipped_entries(), 0);
        assert_eq!(entries[0].size, 19);
    }

    #[test]
    fn test_discover_with_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = create_test_archive(&temp_dir);

        let mut discovery = ArchiveDiscovery::new(archive_path, pattern("*.csv"));
        let entries = discovery.discover_entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| is_csv_entry(&e.name)));
        assert_eq!(discovery.skipped_entries(), 1);
    }

    #[test]
    fn test_discover_missing_archive() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("missing.zip");

        let mut discovery = ArchiveDiscovery::new(archive_path.clone(), pattern("*"));
        match discovery.discover_entries() {
            Err(SplitterError::ArchiveNotFound { path }) => assert_eq!(path, archive_path),
            other => panic!("Expected ArchiveNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_invalid_archive() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("broken.zip");
        std::fs::write(&archive_path, "this is not a zip file").unwrap();

        let mut discovery = ArchiveDiscovery::new(archive_path, pattern("*"));
        assert!(matches!(
            discovery.discover_entries(),
            Err(SplitterError::Archive(_))
        ));
    }

    #[test]
    fn test_is_csv_entry() {
        assert!(is_csv_entry("part.csv"));
        assert!(is_csv_entry("data/part.CSV"));
        assert!(!is_csv_entry("part.txt"));
        assert!(!is_csv_entry("csv"));
    }
}
