// ==========================================
// BVCR điện lạnh - domain layer
// ==========================================
// Value objects assembled fresh from the remote sheets on every fetch.
// No shared mutable ownership, no back-references.
// ==========================================

pub mod equipment;
pub mod history;
pub mod types;
pub mod user;

pub use equipment::{Equipment, EquipmentId};
pub use history::HistoryRecord;
pub use types::{EquipmentType, MachineStatus, RecordType, UserRole};
pub use user::User;
