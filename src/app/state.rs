// ==========================================
// BVCR điện lạnh - session state
// ==========================================
// The current user lives in exactly one place. Init loads it from the
// session file, login persists it, logout clears both. Leaf code gets
// read access through the accessor, never the file.
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::User;

/// Technician session, persisted across app restarts as a JSON file
/// under the user data directory.
pub struct Session {
    current: Option<User>,
    path: PathBuf,
}

impl Session {
    /// Default session file location. Overridable via
    /// `DIENLANH_SESSION_PATH` (handy for tests and CI).
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("DIENLANH_SESSION_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        let mut path = PathBuf::from("./dienlanh_session.json");
        if let Some(data_dir) = dirs::data_dir() {
            let dir = data_dir.join("dienlanh-sync");
            fs::create_dir_all(&dir).ok();
            path = dir.join("session.json");
        }
        path
    }

    /// Load the persisted session, if any. A missing or unreadable
    /// file simply means nobody is logged in.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = read_session_file(&path);
        Session { current, path }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_leader(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.role.is_leader())
    }

    /// Record a successful login and persist it. Persistence is
    /// best-effort: a write failure is logged but the in-memory login
    /// stands.
    pub fn login(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), error = %e, "session persist failed");
                }
            }
            Err(e) => warn!(error = %e, "session encode failed"),
        }
        self.current = Some(user);
    }

    /// Clear the session and remove the session file.
    pub fn logout(&mut self) {
        self.current = None;
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "session file removal failed");
            }
        }
    }
}

fn read_session_file(path: &Path) -> Option<User> {
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt session file ignored");
            None
        }
    }
}
