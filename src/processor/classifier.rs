//! Record classification
//!
//! Routes a raw CSV record to its record type using the identifier at the
//! start of the first field.

use crate::constants::{RECORD_IDENTIFIER_LEN, UTF8_BOM};
use crate::schema::RecordType;
use csv::ByteRecord;

/// Outcome of classifying a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Known(RecordType),
    Unrecognised,
    Blank,
}

/// Extract the record identifier from the first field of a row
pub fn record_identifier(first_field: &[u8]) -> Option<&[u8]> {
    let field = first_field.strip_prefix(UTF8_BOM).unwrap_or(first_field);
    field.get(..RECORD_IDENTIFIER_LEN)
}

/// Classify a record by its identifier
pub fn classify(record: &ByteRecord) -> Classification {
    let first = match record.get(0) {
        Some(field) => field,
        None => return Classification::Blank,
    };

    if record.len() == 1 && first.is_empty() {
        return Classification::Blank;
    }

    match record_identifier(first).and_then(RecordType::from_identifier) {
        Some(record_type) => Classification::Known(record_type),
        None => Classification::Unrecognised,
    }
}
