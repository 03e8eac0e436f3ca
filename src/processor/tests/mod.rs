//! Integration tests for the processor module
//!
//! Tests the complete split pipeline using small generated archives.


use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// Write a ZIP archive containing the given `(name, content)` members
pub fn write_archive(path: &Path, members: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in members {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// Data rows (header excluded) of an output file
pub fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// A minimal supply covering a header, one property and a trailer
pub const SMALL_SUPPLY: &str = "10,\"ORDNANCE SURVEY\",\"ORDNANCE SURVEY\",2024-01-15,1,2024-01-15,09:30:00,1.0,F\n\
29,\"AddressBase Premium\",\"Great Britain\",,,\"Ordnance Survey\",\"Weekly\",\"ORDNANCE SURVEY\",,7655,\"British National Grid\",\"metres\",2024-01-15,\"AddressBase Premium Classification Scheme\",2024-01-15,\"ENG\",\"UTF-8\"\n\
11,I,1,7400001,1,7655,2,2001-01-01,1,8,1.0,2001-01-01,,2020-05-01,2001-01-01,430000.00,114000.00,50.9,-1.4,430100.00,114100.00,50.9,-1.4,10\n\
15,I,2,7400001,\"HIGH STREET\",,\"SOUTHAMPTON\",\"SOUTHAMPTON\",ENG,2001-01-01,,2020-05-01,2001-01-01\n\
21,I,3,100060000001,1,2,2001-01-01,,430050.00,114050.00,50.9,-1.4,1,1780,E,2001-01-01,,2020-05-01,2001-01-01,D,SO14 1AA,0\n\
24,I,4,100060000001,1780L000001,ENG,1,2001-01-01,,2020-05-01,2001-01-01,,,,,,12,,,,,7400001,1,,,Y\n\
28,I,5,100060000001,12345678,,,,,12,,\"HIGH STREET\",,,\"SOUTHAMPTON\",\"SO14 1AA\",S,1A,,,,,,,2024-01-15,2001-01-01,,2020-05-01,2001-01-01\n\
32,I,6,100060000001,1780C000001,RD04,\"AddressBase Premium Classification Scheme\",1.0,2001-01-01,,2020-05-01,2001-01-01\n\
99,0,8,2024-01-15,09:31:00\n";

/// Create a single-entry archive in `dir` and return its path and an output dir
pub fn create_small_archive(dir: &Path) -> (PathBuf, PathBuf) {
    let archive_path = dir.join("AB Premium Test.zip");
    write_archive(
        &archive_path,
        &[("AddressBasePremium_FULL_2024-01-15_001.csv", SMALL_SUPPLY)],
    );
    (archive_path, dir.join("extracted"))
}
