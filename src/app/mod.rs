// ==========================================
// BVCR điện lạnh - application layer
// ==========================================
// Session ownership and the pure query helpers behind the UI. The UI
// itself (views, camera, navigation) is an external collaborator.
// ==========================================

pub mod catalog;
pub mod state;

pub use catalog::{available_areas, available_departments, filter_equipment, EquipmentFilter};
pub use state::Session;
