// ==========================================
// BVCR điện lạnh - importer layer
// ==========================================
// The parsing-and-normalization pipeline: CSV text → raw rows →
// typed domain records. Pure and total; the network lives in
// `crate::sheets`.
// ==========================================

pub mod csv_parser;
pub mod error;
pub mod field_resolver;
pub mod fields;
pub mod record_mapper;

pub use csv_parser::{parse_csv, RawRow};
pub use error::{SyncError, SyncResult};
pub use field_resolver::resolve;
pub use record_mapper::{has_identifier, to_equipment, to_history_record, to_user};
