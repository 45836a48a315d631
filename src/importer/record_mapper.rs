// ==========================================
// BVCR điện lạnh - record mapper
// ==========================================
// Turns raw sheet rows into typed domain records. Everything degrades:
// a missing attribute becomes its default, a bad date becomes "now".
// Only a missing identifier excludes a row, and that filter runs
// before mapping (see `has_identifier`).
// ==========================================

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::warn;

use crate::domain::{
    Equipment, EquipmentId, EquipmentType, HistoryRecord, MachineStatus, RecordType, User,
    UserRole,
};
use crate::importer::csv_parser::RawRow;
use crate::importer::field_resolver::resolve;
use crate::importer::fields;

/// Pre-mapping row filter: does this row carry any equipment
/// identifier at all? Rows failing this never become phantom
/// equipment. Independent of the parser's blank-row drop.
pub fn has_identifier(row: &RawRow, kind: EquipmentType) -> bool {
    !resolve(row, fields::presence_aliases(kind)).is_empty()
}

/// Map an equipment-sheet row. Duplicate raw numbers within one sheet
/// are mapped as-is; deduplication is nobody's job here.
pub fn to_equipment(row: &RawRow, kind: EquipmentType) -> Equipment {
    let raw_id = non_empty_or(resolve(row, fields::EQUIPMENT_ID), fields::NOT_AVAILABLE);
    let condition = resolve(row, fields::CONDITION);

    Equipment {
        id: EquipmentId::new(kind, raw_id),
        kind,
        area: non_empty_or(resolve(row, fields::AREA), fields::NOT_AVAILABLE),
        department: non_empty_or(resolve(row, fields::DEPARTMENT), fields::NOT_AVAILABLE),
        room: non_empty_or(resolve(row, fields::ROOM), fields::NOT_AVAILABLE),
        brand: non_empty_or(resolve(row, fields::BRAND), fields::NOT_AVAILABLE),
        model: non_empty_or(resolve(row, fields::MODEL), fields::NOT_AVAILABLE),
        status: MachineStatus::from_condition(&condition),
        details: row.clone(),
    }
}

/// Map a history-sheet row. `index` is the source row position, used
/// in the synthetic per-fetch id.
pub fn to_history_record(row: &RawRow, index: usize) -> HistoryRecord {
    let ngay = resolve(row, fields::REPORT_DATE);
    let gio = resolve(row, fields::REPORT_TIME);
    let report_kind = resolve(row, fields::REPORT_KIND);
    let machine = resolve(row, fields::REPORT_MACHINE);
    let photo = resolve(row, fields::REPORT_PHOTO);

    let timestamp = parse_timestamp(&ngay, &gio).unwrap_or_else(|| {
        if !ngay.is_empty() {
            warn!(date = %ngay, time = %gio, "unparseable report date, using fetch instant");
        }
        Local::now().naive_local()
    });

    HistoryRecord {
        id: format!("SHEET-{}-{}", index, Utc::now().timestamp_millis()),
        machine_id: non_empty_or(machine, fields::NOT_AVAILABLE),
        kind: RecordType::from_report_kind(&report_kind),
        timestamp,
        status: non_empty_or(report_kind, fields::DEFAULT_REPORT_STATUS),
        notes: resolve(row, fields::REPORT_NOTES),
        performer: resolve(row, fields::REPORT_PERFORMER),
        photo_url: Some(photo).filter(|p| !p.is_empty()),
        details: row.clone(),
    }
}

/// Map an accounts-sheet row. The `tk` sheet uses fixed lowercase
/// headers, read directly rather than via alias lists.
pub fn to_user(row: &RawRow) -> User {
    let cell = |key: &str| -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    };

    User {
        username: cell(fields::ACCOUNT_USERNAME),
        password: non_empty_or(cell(fields::ACCOUNT_PASSWORD), fields::DEFAULT_PASSWORD),
        full_name: non_empty_or(cell(fields::ACCOUNT_FULL_NAME), fields::DEFAULT_FULL_NAME),
        role: UserRole::from_label(&cell(fields::ACCOUNT_ROLE)),
        department: non_empty_or(cell(fields::ACCOUNT_DEPARTMENT), fields::NOT_AVAILABLE),
    }
}

/// Parse the sheet's `D/M/Y` date plus `HH:MM` time into a local
/// timestamp. Exactly three `/`-separated parts are reinterpreted as
/// day/month/year; a missing time means midnight. `YYYY-MM-DD` is
/// accepted as the one useful fallback shape. Anything else is `None`
/// and the caller degrades to "now".
fn parse_timestamp(ngay: &str, gio: &str) -> Option<NaiveDateTime> {
    if ngay.is_empty() {
        return None;
    }

    let parts: Vec<&str> = ngay.split('/').collect();
    let date = if parts.len() == 3 {
        let day: u32 = parts[0].trim().parse().ok()?;
        let month: u32 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?
    } else {
        NaiveDate::parse_from_str(ngay, "%Y-%m-%d").ok()?
    };

    let gio = if gio.is_empty() { "00:00" } else { gio };
    let time = NaiveTime::parse_from_str(gio, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(gio, "%H:%M:%S"))
        .ok()?;

    Some(date.and_time(time))
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
