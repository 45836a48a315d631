// ==========================================
// BVCR điện lạnh - catalog queries
// ==========================================
// Pure filter/option helpers behind the equipment list screen. The
// merged collection is never reordered here; filters only narrow it.
// ==========================================

use crate::domain::{Equipment, EquipmentType, MachineStatus};

/// Active filters of the equipment list. `None` means "Tất cả".
#[derive(Debug, Clone)]
pub struct EquipmentFilter {
    pub kind: EquipmentType,
    pub status: Option<MachineStatus>,
    pub area: Option<String>,
    pub department: Option<String>,
    /// Free-text search over machine number, full id, room, area and
    /// department, case-insensitive. Technicians type the bare machine
    /// number, so the search ignores the id's type prefix.
    pub search: String,
}

impl EquipmentFilter {
    pub fn all(kind: EquipmentType) -> Self {
        EquipmentFilter {
            kind,
            status: None,
            area: None,
            department: None,
            search: String::new(),
        }
    }

    pub fn matches(&self, eq: &Equipment) -> bool {
        if eq.kind != self.kind {
            return false;
        }
        if let Some(status) = self.status {
            if eq.status != status {
                return false;
            }
        }
        if let Some(area) = &self.area {
            if eq.area.trim() != area.trim() {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if eq.department.trim() != department.trim() {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            eq.id.raw(),
            &eq.id.to_string(),
            &eq.room,
            &eq.area,
            &eq.department,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn filter_equipment<'a>(
    items: &'a [Equipment],
    filter: &EquipmentFilter,
) -> Vec<&'a Equipment> {
    items.iter().filter(|eq| filter.matches(eq)).collect()
}

/// Distinct, sorted area options for one equipment tab. Blank and
/// `N/A` placeholders are not options.
pub fn available_areas(items: &[Equipment], kind: EquipmentType) -> Vec<String> {
    let mut areas: Vec<String> = items
        .iter()
        .filter(|eq| eq.kind == kind)
        .map(|eq| eq.area.trim().to_string())
        .filter(|a| !a.is_empty() && a != "N/A")
        .collect();
    areas.sort();
    areas.dedup();
    areas
}

/// Distinct, sorted department options, optionally narrowed to one
/// area (the two dropdowns cascade).
pub fn available_departments(
    items: &[Equipment],
    kind: EquipmentType,
    area: Option<&str>,
) -> Vec<String> {
    let mut departments: Vec<String> = items
        .iter()
        .filter(|eq| eq.kind == kind)
        .filter(|eq| area.map_or(true, |a| eq.area.trim() == a.trim()))
        .map(|eq| eq.department.trim().to_string())
        .filter(|d| !d.is_empty() && d != "N/A")
        .collect();
    departments.sort();
    departments.dedup();
    departments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EquipmentId;
    use crate::importer::RawRow;

    fn equipment(kind: EquipmentType, raw: &str, area: &str, dept: &str) -> Equipment {
        Equipment {
            id: EquipmentId::new(kind, raw),
            kind,
            area: area.to_string(),
            department: dept.to_string(),
            room: "101".to_string(),
            brand: "N/A".to_string(),
            model: "N/A".to_string(),
            status: MachineStatus::Normal,
            details: RawRow::new(),
        }
    }

    fn sample() -> Vec<Equipment> {
        vec![
            equipment(EquipmentType::Ml, "1", "Khu A", "Khoa Nội"),
            equipment(EquipmentType::Ml, "2", "Khu B", "Khoa Ngoại"),
            equipment(EquipmentType::Mnu, "138", "Khu A", "Khoa Nội"),
            equipment(EquipmentType::Tl, "138", "N/A", ""),
        ]
    }

    #[test]
    fn test_filter_by_tab() {
        let items = sample();
        let hits = filter_equipment(&items, &EquipmentFilter::all(EquipmentType::Ml));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_by_bare_machine_number() {
        let items = sample();
        let mut filter = EquipmentFilter::all(EquipmentType::Mnu);
        filter.search = "138".to_string();
        let hits = filter_equipment(&items, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.to_string(), "MNU-138");

        // full prefixed id also matches
        filter.search = "mnu-138".to_string();
        assert_eq!(filter_equipment(&items, &filter).len(), 1);
    }

    #[test]
    fn test_area_filter_trims() {
        let items = sample();
        let mut filter = EquipmentFilter::all(EquipmentType::Ml);
        filter.area = Some(" Khu A ".to_string());
        let hits = filter_equipment(&items, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.raw(), "1");
    }

    #[test]
    fn test_available_options_skip_placeholders() {
        let items = sample();
        assert_eq!(
            available_areas(&items, EquipmentType::Ml),
            vec!["Khu A".to_string(), "Khu B".to_string()]
        );
        // the TL row only has N/A / blank values, so no options
        assert!(available_areas(&items, EquipmentType::Tl).is_empty());
        assert!(available_departments(&items, EquipmentType::Tl, None).is_empty());
    }

    #[test]
    fn test_departments_cascade_from_area() {
        let items = sample();
        assert_eq!(
            available_departments(&items, EquipmentType::Ml, Some("Khu B")),
            vec!["Khoa Ngoại".to_string()]
        );
    }
}
