//! Ferrous pDNS Domain Layer
pub mod answer_scanner;
pub mod capture_line;
pub mod cell;
pub mod config;
pub mod decoded_message;
pub mod errors;
pub mod history_query;
pub mod observation;
pub mod rdata_blob;
pub mod record_group;
pub mod value_set;

pub use answer_scanner::{AnswerScanner, ScanState};
pub use capture_line::CaptureLine;
pub use cell::{Cell, CellEmitter, Column, DEFAULT_COLUMN_FAMILY};
pub use config::{CliOverrides, Config};
pub use decoded_message::{DecodedMessage, MessageLine, MessageSection, SectionKind};
pub use errors::DomainError;
pub use history_query::{RdataQuery, RrsetQuery};
pub use observation::{RdataSummary, RrsetSummary, StoredRow};
pub use rdata_blob::RdataBlob;
pub use record_group::{AnswerRecord, PackedGroup, RecordGrouper, MIN_RR_FIELDS};
pub use value_set::ValueSet;
