// ==========================================
// BVCR điện lạnh - equipment entity
// ==========================================
// Typed composite id (type code + raw machine number) plus the
// attributes surfaced on equipment cards.
// ==========================================

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::types::{EquipmentType, MachineStatus};
use crate::importer::RawRow;

/// Composite equipment key: `{typeCode}-{rawIdentifier}`.
///
/// The type-code prefix is what keeps the merged collection free of
/// cross-type collisions: `MNU-138` and `TL-138` are distinct keys.
/// Two same-type rows sharing a raw number are a data-quality issue in
/// the source sheet and are deliberately kept as duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquipmentId {
    kind: EquipmentType,
    raw: String,
}

impl EquipmentId {
    pub fn new(kind: EquipmentType, raw: impl Into<String>) -> Self {
        EquipmentId {
            kind,
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> EquipmentType {
        self.kind
    }

    /// The machine number as written in the sheet, without the prefix.
    /// This is what technicians see and what report payloads carry.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.code(), self.raw)
    }
}

impl FromStr for EquipmentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, raw) = s
            .split_once('-')
            .ok_or_else(|| format!("equipment id without type prefix: {s}"))?;
        let kind = EquipmentType::from_code(code)
            .ok_or_else(|| format!("unknown equipment type code: {code}"))?;
        Ok(EquipmentId::new(kind, raw))
    }
}

// Serialized as the prefixed string, matching the sheet-facing form.
impl Serialize for EquipmentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EquipmentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One piece of equipment, assembled fresh from a sheet row on every
/// fetch. Attributes default to `"N/A"` independently when the source
/// column is absent or blank; `details` keeps every original column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    pub area: String,
    pub department: String,
    pub room: String,
    pub brand: String,
    pub model: String,
    pub status: MachineStatus,
    pub details: RawRow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = EquipmentId::new(EquipmentType::Mnu, "138");
        assert_eq!(id.to_string(), "MNU-138");
        assert_eq!(id.raw(), "138");

        let parsed: EquipmentId = "MNU-138".parse().unwrap();
        assert_eq!(parsed, id);

        // raw identifiers may themselves contain a dash
        let dashed: EquipmentId = "TL-A-12".parse().unwrap();
        assert_eq!(dashed.kind(), EquipmentType::Tl);
        assert_eq!(dashed.raw(), "A-12");

        assert!("138".parse::<EquipmentId>().is_err());
        assert!("XX-138".parse::<EquipmentId>().is_err());
    }

    #[test]
    fn test_same_raw_number_differs_by_type() {
        let a = EquipmentId::new(EquipmentType::Mnu, "138");
        let b = EquipmentId::new(EquipmentType::Tl, "138");
        assert_ne!(a, b);
        assert_eq!(a.raw(), b.raw());
    }

    #[test]
    fn test_id_serde_as_string() {
        let id = EquipmentId::new(EquipmentType::Ml, "7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ML-7\"");
        let back: EquipmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
