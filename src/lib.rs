//! AddressBase Premium Splitter Library
//!
//! A Rust library for splitting Ordnance Survey AddressBase Premium ZIP
//! supplies into one CSV file per record type.
//!
//! This library provides tools for:
//! - Listing the CSV members of a supply archive
//! - Classifying rows by their two digit record identifier
//! - Writing each record type to its own CSV with the canonical header
//! - Reporting per-type record counts

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod schema;

// Re-export commonly used types
pub use config::SplitterConfig;
pub use error::{Result, SplitterError};
pub use models::{RecordCounts, SplitStats};
pub use processor::SplitProcessor;
pub use schema::RecordType;
