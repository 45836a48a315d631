// ==========================================
// BVCR điện lạnh - report payload
// ==========================================
// The write-path body posted to the script endpoint, and the builder
// assembling the destination-column map from an equipment record, the
// technician on shift and the form input.
// ==========================================

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;
use crate::domain::{Equipment, User};
use crate::sheets::aggregator::HISTORY_SHEET;

/// What kind of report the technician is filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Daily check (`Kiểm tra hằng ngày`)
    Checkin,
    /// Incident (`Báo cáo sự cố`) — notifies managers
    Incident,
}

impl ReportKind {
    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Checkin => "Kiểm tra hằng ngày",
            ReportKind::Incident => "Báo cáo sự cố",
        }
    }
}

/// JSON body of the write path. `data` keys are the exact destination
/// column headers of the history sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub sheet: String,
    /// Photo as a base64 data string; no separate binary channel.
    pub photo_data: Option<String>,
    pub notify_managers: bool,
    pub data: BTreeMap<String, String>,
}

impl ReportPayload {
    /// Assemble a report row. Free-form `form` fields are merged over
    /// the base columns (a form field may override a base column);
    /// technician fields, notes and the Drive folder link are written
    /// last. The machine number goes in raw, without its type prefix,
    /// matching the sheet's own format.
    pub fn build(
        kind: ReportKind,
        equipment: &Equipment,
        technician: &User,
        form: &BTreeMap<String, String>,
        photo_data: Option<String>,
        config: &SheetConfig,
        now: DateTime<Local>,
    ) -> Self {
        let mut data = BTreeMap::new();
        data.insert("Ngày".to_string(), now.format("%-d/%-m/%Y").to_string());
        data.insert("Giờ".to_string(), now.format("%H:%M").to_string());
        data.insert("Loại báo cáo".to_string(), kind.label().to_string());
        data.insert("Máy số".to_string(), equipment.id.raw().to_string());
        data.insert("Loại máy".to_string(), equipment.kind.label().to_string());
        data.insert("Khu vực".to_string(), equipment.area.clone());
        data.insert("Khoa/Phòng".to_string(), equipment.department.clone());
        data.insert("Phòng".to_string(), equipment.room.clone());

        for (key, value) in form {
            data.insert(key.clone(), value.clone());
        }

        data.insert(
            "KTV thực hiện".to_string(),
            technician.full_name.clone(),
        );
        data.insert("Đơn vị KTV".to_string(), technician.department.clone());
        data.insert(
            "Ghi chú".to_string(),
            form.get("GHI CHÚ").cloned().unwrap_or_default(),
        );
        data.insert(
            "Link Folder Drive".to_string(),
            config.drive_folder_url.clone(),
        );

        ReportPayload {
            sheet: HISTORY_SHEET.to_string(),
            photo_data,
            notify_managers: kind == ReportKind::Incident,
            data,
        }
    }
}
