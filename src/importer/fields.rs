// ==========================================
// BVCR điện lạnh - field alias tables
// ==========================================
// The sheets are edited by hand, so one logical field appears under
// several header spellings (with and without diacritics, yearly MTS
// variants). Alias order encodes priority: the first alias with a
// non-empty value wins. Extend the lists here; the resolver stays
// untouched.
// ==========================================

use crate::domain::EquipmentType;

// ===== Equipment sheets (ML / MNU / TL) =====

/// Identifier aliases used when mapping a row to [`Equipment`]. Shared
/// by all three types.
///
/// [`Equipment`]: crate::domain::Equipment
pub const EQUIPMENT_ID: &[&str] = &["Máy số", "MTS 2025", "MTS QT 2025", "MTS", "ID", "STT"];

pub const AREA: &[&str] = &["Khu vực", "Vị trí", "Khu Vực", "Khu vuc"];
pub const DEPARTMENT: &[&str] = &["Khoa/Phòng", "Khoa", "Đơn vị", "Bộ phận", "Khoa/Phong"];
pub const ROOM: &[&str] = &["Phòng", "Số phòng", "Phong"];
pub const BRAND: &[&str] = &["Hiệu", "Brand", "Hieu", "Hieu may"];
pub const MODEL: &[&str] = &["Model", "Model may"];
pub const CONDITION: &[&str] = &["Tình trạng", "Tinh trang"];

/// Identifier aliases used by the pre-mapping presence filter (a row
/// with no identifier never becomes phantom equipment). Narrower than
/// [`EQUIPMENT_ID`] and type-specific: each sheet only carries its own
/// yearly MTS column.
pub fn presence_aliases(kind: EquipmentType) -> &'static [&'static str] {
    match kind {
        EquipmentType::Ml => &["Máy số", "MTS 2025", "MTS", "STT"],
        EquipmentType::Mnu | EquipmentType::Tl => &["Máy số", "MTS QT 2025", "MTS", "STT"],
    }
}

// ===== History sheet (NHAT_KY_THIET_BI) =====

pub const REPORT_DATE: &[&str] = &["Ngày", "Ngay"];
pub const REPORT_TIME: &[&str] = &["Giờ", "Gio", "Time"];
pub const REPORT_KIND: &[&str] = &["Loại báo cáo", "Loai bao cao", "Loại BC"];
pub const REPORT_MACHINE: &[&str] =
    &["Máy số", "May so", "MTS", "MTS 2025", "MTS QT 2025", "STT"];
pub const REPORT_PHOTO: &[&str] = &["Link Ảnh Thực Tế", "Link Anh Thuc Te", "Ảnh", "Photo"];
pub const REPORT_NOTES: &[&str] = &["GHI CHÚ", "Ghi chú", "Note"];
pub const REPORT_PERFORMER: &[&str] = &["KTV thực hiện", "KTV"];

// ===== Accounts sheet (tk) =====
// Fixed lowercase headers, accessed directly rather than via aliases.

pub const ACCOUNT_USERNAME: &str = "tk";
pub const ACCOUNT_PASSWORD: &str = "mk";
pub const ACCOUNT_FULL_NAME: &str = "Ten";
pub const ACCOUNT_ROLE: &str = "role";
pub const ACCOUNT_DEPARTMENT: &str = "donvi";

// ===== Status / kind keywords =====
// Matched as raw substrings on lowercased text; diacritics as written.

pub const KW_BROKEN: &str = "hỏng";
pub const KW_WARNING: &str = "chú ý";
pub const KW_INCIDENT: &str = "sự cố";

// ===== Defaults =====

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_PASSWORD: &str = "123";
pub const DEFAULT_FULL_NAME: &str = "Người dùng";
pub const DEFAULT_REPORT_STATUS: &str = "Đã kiểm tra";
