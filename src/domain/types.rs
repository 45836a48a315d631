// ==========================================
// BVCR điện lạnh - domain enums
// ==========================================
// Equipment categories, machine condition, account roles and report
// kinds, with the Vietnamese labels used in the source spreadsheet.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::importer::fields;

/// Equipment category.
///
/// The short code doubles as the sheet tab name and as the namespace
/// prefix of [`EquipmentId`](crate::domain::EquipmentId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    /// Máy lạnh (air conditioner)
    #[serde(rename = "Máy Lạnh")]
    Ml,
    /// Máy nước uống (water cooler)
    #[serde(rename = "Máy Nước Uống")]
    Mnu,
    /// Tủ lạnh (refrigerator)
    #[serde(rename = "Tủ Lạnh")]
    Tl,
}

impl EquipmentType {
    /// Fixed merge order of the equipment sheets: ML, then MNU, then TL.
    pub const ALL: [EquipmentType; 3] =
        [EquipmentType::Ml, EquipmentType::Mnu, EquipmentType::Tl];

    /// Namespace prefix for equipment ids.
    pub fn code(self) -> &'static str {
        match self {
            EquipmentType::Ml => "ML",
            EquipmentType::Mnu => "MNU",
            EquipmentType::Tl => "TL",
        }
    }

    /// Sheet tab name on the remote spreadsheet (same as the code).
    pub fn sheet_name(self) -> &'static str {
        self.code()
    }

    /// Display label, also written into report payloads (`Loại máy`).
    pub fn label(self) -> &'static str {
        match self {
            EquipmentType::Ml => "Máy Lạnh",
            EquipmentType::Mnu => "Máy Nước Uống",
            EquipmentType::Tl => "Tủ Lạnh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ML" => Some(EquipmentType::Ml),
            "MNU" => Some(EquipmentType::Mnu),
            "TL" => Some(EquipmentType::Tl),
            _ => None,
        }
    }
}

/// Machine condition, derived from the free-text `Tình trạng` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineStatus {
    #[serde(rename = "Bình thường")]
    Normal,
    #[serde(rename = "Cần chú ý")]
    Warning,
    #[serde(rename = "Hỏng")]
    Broken,
}

impl MachineStatus {
    /// Substring match on the lowercased condition text. Diacritics are
    /// compared as written; a differently-encoded `hỏng` will not match
    /// and the row stays `Normal`.
    pub fn from_condition(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains(fields::KW_BROKEN) {
            MachineStatus::Broken
        } else if lower.contains(fields::KW_WARNING) {
            MachineStatus::Warning
        } else {
            MachineStatus::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MachineStatus::Normal => "Bình thường",
            MachineStatus::Warning => "Cần chú ý",
            MachineStatus::Broken => "Hỏng",
        }
    }
}

/// Account role, from the `role` column of the accounts sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Tổ trưởng")]
    ToTruong,
    #[serde(rename = "Nhóm trưởng")]
    NhomTruong,
    #[serde(rename = "Giám sát")]
    GiamSat,
    #[serde(rename = "Nhân viên", other)]
    NhanVien,
}

impl UserRole {
    /// Parse the role cell. Empty or unrecognized text falls back to
    /// `Nhân viên` (line worker).
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Tổ trưởng" => UserRole::ToTruong,
            "Nhóm trưởng" => UserRole::NhomTruong,
            "Giám sát" => UserRole::GiamSat,
            _ => UserRole::NhanVien,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::ToTruong => "Tổ trưởng",
            UserRole::NhomTruong => "Nhóm trưởng",
            UserRole::GiamSat => "Giám sát",
            UserRole::NhanVien => "Nhân viên",
        }
    }

    /// Leaders review incident reports: every role except line workers.
    pub fn is_leader(self) -> bool {
        !matches!(self, UserRole::NhanVien)
    }
}

/// Kind of a history record, derived from the `Loại báo cáo` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "Kiểm tra")]
    Check,
    #[serde(rename = "Sự cố")]
    Incident,
}

impl RecordType {
    /// Substring match for the incident keyword on the lowercased text.
    pub fn from_report_kind(text: &str) -> Self {
        if text.to_lowercase().contains(fields::KW_INCIDENT) {
            RecordType::Incident
        } else {
            RecordType::Check
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordType::Check => "Kiểm tra",
            RecordType::Incident => "Sự cố",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_condition() {
        assert_eq!(MachineStatus::from_condition("Hỏng"), MachineStatus::Broken);
        assert_eq!(
            MachineStatus::from_condition("Cần chú ý"),
            MachineStatus::Warning
        );
        assert_eq!(
            MachineStatus::from_condition("Bình thường"),
            MachineStatus::Normal
        );
        assert_eq!(MachineStatus::from_condition(""), MachineStatus::Normal);
        // broken wins when both keywords appear
        assert_eq!(
            MachineStatus::from_condition("hỏng, cần chú ý"),
            MachineStatus::Broken
        );
    }

    #[test]
    fn test_record_type_from_report_kind() {
        assert_eq!(
            RecordType::from_report_kind("Báo cáo sự cố"),
            RecordType::Incident
        );
        assert_eq!(
            RecordType::from_report_kind("Kiểm tra hằng ngày"),
            RecordType::Check
        );
        assert_eq!(RecordType::from_report_kind(""), RecordType::Check);
    }

    #[test]
    fn test_role_parsing_and_leaders() {
        assert_eq!(UserRole::from_label("Tổ trưởng"), UserRole::ToTruong);
        assert_eq!(UserRole::from_label(" Giám sát "), UserRole::GiamSat);
        assert_eq!(UserRole::from_label("???"), UserRole::NhanVien);
        assert_eq!(UserRole::from_label(""), UserRole::NhanVien);

        assert!(UserRole::ToTruong.is_leader());
        assert!(UserRole::NhomTruong.is_leader());
        assert!(UserRole::GiamSat.is_leader());
        assert!(!UserRole::NhanVien.is_leader());
    }

    #[test]
    fn test_equipment_type_codes() {
        for t in EquipmentType::ALL {
            assert_eq!(EquipmentType::from_code(t.code()), Some(t));
            assert_eq!(t.sheet_name(), t.code());
        }
        assert_eq!(EquipmentType::from_code("XX"), None);
    }
}
