// ==========================================
// BVCR điện lạnh - sheets layer
// ==========================================
// Everything that talks to the remote spreadsheet: the HTTP client,
// the concurrent aggregator, the report write path and the media
// helpers.
// ==========================================

pub mod aggregator;
pub mod client;
pub mod drive;
pub mod report;

pub use aggregator::{Aggregator, DataSet, ACCOUNT_SHEET, HISTORY_SHEET};
pub use client::{SheetClient, SheetSource};
pub use drive::{direct_view_url, photo_data_url};
pub use report::{ReportKind, ReportPayload};
