// ==========================================
// BVCR điện lạnh - maintenance history entity
// ==========================================

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::RecordType;
use crate::importer::RawRow;

/// One daily-check or incident report from the history sheet.
///
/// Rebuilt in full on every fetch: `id` is synthesized per fetch
/// (`SHEET-{rowIndex}-{epochMillis}`) and carries no identity across
/// fetches. `machine_id` is the raw machine number without the type
/// prefix, so it does not match [`Equipment::id`] directly; the type
/// would have to be re-derived from the record's own columns, which are
/// not always present. Known linkage gap, kept as-is.
///
/// [`Equipment::id`]: crate::domain::Equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    #[serde(rename = "machineId")]
    pub machine_id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    /// Local wall-clock time of the report. Falls back to the fetch
    /// instant when the sheet's date cell is absent or unparseable.
    pub timestamp: NaiveDateTime,
    /// The raw report-type text, human readable (`Kiểm tra hằng ngày`,
    /// `Báo cáo sự cố`, ...).
    pub status: String,
    pub notes: String,
    pub performer: String,
    #[serde(rename = "photoUrl", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub details: RawRow,
}

impl HistoryRecord {
    /// Whether this is an incident reported within `window` of now.
    /// Drives the leader notification badge.
    pub fn is_recent_incident(&self, window: Duration) -> bool {
        self.kind == RecordType::Incident
            && self.timestamp > Local::now().naive_local() - window
    }
}
