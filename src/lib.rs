// ==========================================
// BVCR điện lạnh - equipment log sync core
// ==========================================
// Data backbone of the refrigeration team's maintenance logger:
// published-spreadsheet read path, forgiving CSV parsing, alias-based
// field mapping, concurrent aggregation and the report write path.
// ==========================================

pub mod app;
pub mod config;
pub mod domain;
pub mod importer;
pub mod logging;
pub mod sheets;

pub use config::SheetConfig;
pub use domain::{Equipment, EquipmentId, EquipmentType, HistoryRecord, MachineStatus, User};
pub use sheets::{Aggregator, DataSet, SheetClient, SheetSource};

/// Crate version, surfaced in the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name used in logs.
pub const APP_NAME: &str = "BVCR điện lạnh sync";
