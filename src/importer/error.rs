// ==========================================
// BVCR điện lạnh - sync error types
// ==========================================
// Tool: thiserror derive macros
// ==========================================

use thiserror::Error;

/// Errors raised by the sheet read/write paths.
///
/// Row-level problems (bad dates, missing columns) never appear here —
/// the mapper degrades them to defaults. These variants only cover the
/// transport boundary; the aggregator collapses any of them into an
/// empty dataset.
#[derive(Error, Debug)]
pub enum SyncError {
    // ===== read path =====
    #[error("sheet fetch failed ({sheet}): {source}")]
    Fetch {
        sheet: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("sheet fetch returned HTTP {status} ({sheet})")]
    Status {
        sheet: String,
        status: reqwest::StatusCode,
    },

    // ===== write path =====
    #[error("report submit failed: {0}")]
    Submit(#[source] reqwest::Error),

    #[error("report payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    // ===== generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the sync paths.
pub type SyncResult<T> = Result<T, SyncError>;
