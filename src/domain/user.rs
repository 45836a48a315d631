// ==========================================
// BVCR điện lạnh - technician account entity
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::UserRole;

/// Account row from the `tk` sheet. Identity is the username.
///
/// Passwords are stored and compared as plaintext — that is the level
/// of protection the source spreadsheet provides, and hardening it is
/// out of scope here. Absent cells get the sheet's conventional
/// defaults (`123`, `Người dùng`, `Nhân viên`, `N/A`); enforcing
/// better data is the sheet owner's problem, not this mapper's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: UserRole,
    pub department: String,
}

impl User {
    /// Verbatim plaintext comparison, exactly as the sheet stores it.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
