// ==========================================
// BVCR điện lạnh - endpoint configuration
// ==========================================
// Compiled defaults with environment overrides, so test and staging
// spreadsheets can be swapped in without a rebuild.
// ==========================================

/// Production spreadsheet document id.
pub const DEFAULT_SHEET_ID: &str = "1XgFRd4_EZmSEFdtLhAWx3Doim4C3PPMRBWLBHjf8g2E";

/// Apps Script web-app endpoint handling report writes.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://script.google.com/macros/s/AKfycbzoMz0zYPaFEqRogNl6BX5ut_DpBDEX00ZLLOGJ1c-GRIxG4djHLyGMzqaQHGaczJY/exec";

/// Drive folder receiving report photos; the link is echoed into every
/// submitted row.
pub const DEFAULT_DRIVE_FOLDER_URL: &str =
    "https://drive.google.com/drive/folders/1I_BfAxXX-5UrkMTf8CWFr2Dd4gM9EKo_";

/// Remote endpoints for the sheet read/write paths.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    pub script_url: String,
    pub drive_folder_url: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            spreadsheet_id: DEFAULT_SHEET_ID.to_string(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            drive_folder_url: DEFAULT_DRIVE_FOLDER_URL.to_string(),
        }
    }
}

impl SheetConfig {
    /// Build from environment, falling back to the compiled defaults.
    ///
    /// Recognized variables: `DIENLANH_SHEET_ID`, `DIENLANH_SCRIPT_URL`,
    /// `DIENLANH_DRIVE_FOLDER_URL`. Blank values are ignored.
    pub fn from_env() -> Self {
        let mut config = SheetConfig::default();
        if let Some(id) = env_non_empty("DIENLANH_SHEET_ID") {
            config.spreadsheet_id = id;
        }
        if let Some(url) = env_non_empty("DIENLANH_SCRIPT_URL") {
            config.script_url = url;
        }
        if let Some(url) = env_non_empty("DIENLANH_DRIVE_FOLDER_URL") {
            config.drive_folder_url = url;
        }
        config
    }

    /// CSV export endpoint for this spreadsheet. The client appends
    /// `tqx=out:csv&sheet=<name>` as query parameters.
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq",
            self.spreadsheet_id
        )
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_url() {
        let config = SheetConfig::default();
        assert!(config.export_url().contains(DEFAULT_SHEET_ID));
        assert!(config.export_url().ends_with("/gviz/tq"));
    }

    #[test]
    fn test_custom_spreadsheet_id() {
        let config = SheetConfig {
            spreadsheet_id: "abc123".to_string(),
            ..SheetConfig::default()
        };
        assert_eq!(
            config.export_url(),
            "https://docs.google.com/spreadsheets/d/abc123/gviz/tq"
        );
    }
}
