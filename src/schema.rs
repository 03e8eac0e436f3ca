//! AddressBase Premium record schemas.
//!
//! Every row of an AddressBase Premium CSV starts with a two digit record
//! identifier. This module maps each identifier to its output file name,
//! canonical column header and summary description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record types present in an AddressBase Premium supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Header,
    Street,
    StreetDescriptor,
    Blpu,
    CrossReference,
    Lpi,
    DeliveryPoint,
    Metadata,
    Successor,
    Organisation,
    Classification,
    Trailer,
}

impl RecordType {
    /// All record types in output order
    pub const ALL: [RecordType; 12] = [
        RecordType::Header,
        RecordType::Street,
        RecordType::StreetDescriptor,
        RecordType::Blpu,
        RecordType::CrossReference,
        RecordType::Lpi,
        RecordType::DeliveryPoint,
        RecordType::Metadata,
        RecordType::Successor,
        RecordType::Organisation,
        RecordType::Classification,
        RecordType::Trailer,
    ];

    /// Look up a record type from its two byte identifier
    pub fn from_identifier(identifier: &[u8]) -> Option<Self> {
        match identifier {
            b"10" => Some(RecordType::Header),
            b"11" => Some(RecordType::Street),
            b"15" => Some(RecordType::StreetDescriptor),
            b"21" => Some(RecordType::Blpu),
            b"23" => Some(RecordType::CrossReference),
            b"24" => Some(RecordType::Lpi),
            b"28" => Some(RecordType::DeliveryPoint),
            b"29" => Some(RecordType::Metadata),
            b"30" => Some(RecordType::Successor),
            b"31" => Some(RecordType::Organisation),
            b"32" => Some(RecordType::Classification),
            b"99" => Some(RecordType::Trailer),
            _ => None,
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            RecordType::Header => "10",
            RecordType::Street => "11",
            RecordType::StreetDescriptor => "15",
            RecordType::Blpu => "21",
            RecordType::CrossReference => "23",
            RecordType::Lpi => "24",
            RecordType::DeliveryPoint => "28",
            RecordType::Metadata => "29",
            RecordType::Successor => "30",
            RecordType::Organisation => "31",
            RecordType::Classification => "32",
            RecordType::Trailer => "99",
        }
    }

    /// Name of the CSV file this record type is written to
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordType::Header => "ID10_Header_Records.csv",
            RecordType::Street => "ID11_Street_Records.csv",
            RecordType::StreetDescriptor => "ID15_StreetDesc_Records.csv",
            RecordType::Blpu => "ID21_BLPU_Records.csv",
            RecordType::CrossReference => "ID23_XREF_Records.csv",
            RecordType::Lpi => "ID24_LPI_Records.csv",
            RecordType::DeliveryPoint => "ID28_DPA_Records.csv",
            RecordType::Metadata => "ID29_Metadata_Records.csv",
            RecordType::Successor => "ID30_Successor_Records.csv",
            RecordType::Organisation => "ID31_Org_Records.csv",
            RecordType::Classification => "ID32_Class_Records.csv",
            RecordType::Trailer => "ID99_Trailer_Records.csv",
        }
    }

    /// Description used in the processing summary
    pub fn description(&self) -> &'static str {
        match self {
            RecordType::Header => "Header Records",
            RecordType::Street => "Street Records",
            RecordType::StreetDescriptor => "Street Descriptor Records",
            RecordType::Blpu => "BLPU Records",
            RecordType::CrossReference => "XRef Records",
            RecordType::Lpi => "LPI Records",
            RecordType::DeliveryPoint => "Delivery Point Records",
            RecordType::Metadata => "Metadata Records",
            RecordType::Successor => "Successor Records",
            RecordType::Organisation => "Organisation Records",
            RecordType::Classification => "Classification Records",
            RecordType::Trailer => "Trailer Records",
        }
    }

    /// Canonical column header written as the first row of the output file
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            RecordType::Header => HEADER_COLUMNS,
            RecordType::Street => STREET_COLUMNS,
            RecordType::StreetDescriptor => STREET_DESCRIPTOR_COLUMNS,
            RecordType::Blpu => BLPU_COLUMNS,
            RecordType::CrossReference => XREF_COLUMNS,
            RecordType::Lpi => LPI_COLUMNS,
            RecordType::DeliveryPoint => DPA_COLUMNS,
            RecordType::Metadata => METADATA_COLUMNS,
            RecordType::Successor => SUCCESSOR_COLUMNS,
            RecordType::Organisation => ORGANISATION_COLUMNS,
            RecordType::Classification => CLASSIFICATION_COLUMNS,
            RecordType::Trailer => TRAILER_COLUMNS,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.identifier())
    }
}

// Column names follow the published product schema, spelling included.

const HEADER_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CUSTODIAN_NAME",
    "LOCAL_CUSTODIAN_NAME",
    "PROCESS_DATE",
    "VOLUME_NUMBER",
    "ENTRY_DATE",
    "TIME_STAMP",
    "VERSION",
    "FILE_TYPE",
];

const STREET_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "USRN",
    "RECORD_TYPE",
    "SWA_ORG_REF_NAMING",
    "STATE",
    "STATE_DATE",
    "STREET_SURFACE",
    "STREET_CLASSIFICATION",
    "VERSION",
    "STREET_START_DATE",
    "STREET_END_DATE",
    "LAST_UPDATE_DATE",
    "RECORD_ENTRY_DATE",
    "STREET_START_X",
    "STREET_START_Y",
    "STREET_START_LAT",
    "STREET_START_LONG",
    "STREET_END_X",
    "STREET_END_Y",
    "STREET_END_LAT",
    "STREET_END_LONG",
    "STREET_TOLERANCE",
];

const STREET_DESCRIPTOR_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "USRN",
    "STREET_DESCRIPTION",
    "LOCALITY_NAME",
    "TOWN_NAME",
    "ADMINSTRATIVE_AREA",
    "LANGUAGE",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
];

const BLPU_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "LOGICAL_STATUS",
    "BLPU_STATE",
    "BLPU_STATE_DATE",
    "PARENT_UPRN",
    "X_COORDINATE",
    "Y_COORDINATE",
    "LATITUDE",
    "LONGITUDE",
    "RPC",
    "LOCAL_CUSTODIAN_CODE",
    "COUNTRY",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
    "ADDRESSBASE_POSTAL",
    "POSTCODE_LOCATOR",
    "MULTI_OCC_COUNT",
];

const XREF_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "XREF_KEY",
    "CROSS_REFERENCE",
    "VERSION",
    "SOURCE",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
];

const LPI_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "LPI_KEY",
    "LANGUAGE",
    "LOGICAL_STATUS",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
    "SAO_START_NUMBER",
    "SAO_START_SUFFIX",
    "SAO_END_NUMBER",
    "SAO_END_SUFFIX",
    "SAO_TEXT",
    "PAO_START_NUMBER",
    "PAO_START_SUFFIX",
    "PAO_END_NUMBER",
    "PAO_END_SUFFIX",
    "PAO_TEXT",
    "USRN",
    "USRN_MATCH_INDICATOR",
    "AREA_NAME",
    "LEVEL",
    "OFFICIAL_FLAG",
];

const DPA_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "UDPRN",
    "ORGANISATION_NAME",
    "DEPARTMENT_NAME",
    "SUB_BUILDING_NAME",
    "BUILDING_NAME",
    "BUILDING_NUMBER",
    "DEPENDENT_THOROUGHFARE",
    "THOROUGHFARE",
    "DOUBLE_DEPENDENT_LOCALITY",
    "DEPENDENT_LOCALITY",
    "POST_TOWN",
    "POSTCODE",
    "POSTCODE_TYPE",
    "DELIVERY_POINT_SUFFIX",
    "WELSH_DEPENDENT_THOROUGHFARE",
    "WELSH_THOROUGHFARE",
    "WELSH_DOUBLE_DEPENDENT_LOCALITY",
    "WELSH_DEPENDENT_LOCALITY",
    "WELSH_POST_TOWN",
    "PO_BOX_NUMBER",
    "PROCESS_DATE",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
];

const METADATA_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "GAZ_NAME",
    "GAZ_SCOPE",
    "TER_OF_USE",
    "LINKED_DATA",
    "GAZ_OWNER",
    "NGAZ_FREQ",
    "CUSTODIAN_NAME",
    "CUSTODIAN_UPRN",
    "LOCAL_CUSTODIAN_CODE",
    "CO_ORD_SYSTEM",
    "CO_ORD_UNIT",
    "META_DATE",
    "CLASS_SCHEME",
    "GAZ_DATE",
    "LANGUAGE",
    "CHARACTER_SET",
];

const SUCCESSOR_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "SUCC_KEY",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
    "SUCCESSOR",
];

const ORGANISATION_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "ORG_KEY",
    "ORGANISATION",
    "LEGAL_NAME",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
];

const CLASSIFICATION_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "CHANGE_TYPE",
    "PRO_ORDER",
    "UPRN",
    "CLASS_KEY",
    "CLASSIFICATION_CODE",
    "CLASS_SCHEME",
    "SCHEME_VERSION",
    "START_DATE",
    "END_DATE",
    "LAST_UPDATE_DATE",
    "ENTRY_DATE",
];

const TRAILER_COLUMNS: &[&str] = &[
    "RECORD_IDENTIFIER",
    "NEXT_VOLUME_NUMBER",
    "RECORD_COUNT",
    "ENTRY_DATE",
    "TIME_STAMP",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_lookup_matches_table() {
        for record_type in RecordType::ALL {
            let found = RecordType::from_identifier(record_type.identifier().as_bytes());
            assert_eq!(found, Some(record_type));
        }
    }

    #[test]
    fn test_unknown_identifiers() {
        assert_eq!(RecordType::from_identifier(b"12"), None);
        assert_eq!(RecordType::from_identifier(b"1"), None);
        assert_eq!(RecordType::from_identifier(b""), None);
        assert_eq!(RecordType::from_identifier(b"100"), None);
    }

    #[test]
    fn test_file_names_are_unique() {
        let names: HashSet<_> = RecordType::ALL.iter().map(|t| t.file_name()).collect();
        assert_eq!(names.len(), RecordType::ALL.len());
    }

    #[test]
    fn test_file_names_carry_identifier() {
        for record_type in RecordType::ALL {
            let prefix = format!("ID{}_", record_type.identifier());
            assert!(record_type.file_name().starts_with(&prefix));
            assert!(record_type.file_name().ends_with(".csv"));
        }
    }

    #[test]
    fn test_headers_start_with_record_identifier() {
        for record_type in RecordType::ALL {
            assert_eq!(record_type.header()[0], "RECORD_IDENTIFIER");
        }
    }

    #[test]
    fn test_header_widths() {
        let widths: Vec<usize> = RecordType::ALL.iter().map(|t| t.header().len()).collect();
        assert_eq!(widths, vec![9, 24, 13, 22, 12, 26, 29, 17, 10, 11, 12, 5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordType::Blpu.to_string(), "BLPU Records (21)");
    }
}
