// ==========================================
// BVCR điện lạnh - sheet HTTP client
// ==========================================
// Read path: one GET per sheet against the CSV export endpoint.
// Write path: one JSON POST to the Apps Script endpoint.
// No retries, no timeouts beyond the transport defaults, no
// cancellation of in-flight requests.
// ==========================================

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::config::SheetConfig;
use crate::importer::{parse_csv, RawRow, SyncError, SyncResult};
use crate::sheets::report::ReportPayload;

/// Seam over the remote spreadsheet, so the aggregator can be driven
/// by an in-memory source in tests.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch one sheet tab and parse it into rows. Transport and
    /// non-2xx failures surface as errors; the caller decides whether
    /// to degrade (single-sheet refresh) or fail together (full load).
    async fn fetch_rows(&self, sheet: &str) -> SyncResult<Vec<RawRow>>;

    /// Submit a report row. `Ok(true)` purely reflects the HTTP
    /// status; no response body is consumed.
    async fn submit(&self, payload: &ReportPayload) -> SyncResult<bool>;
}

/// Production [`SheetSource`] over the published spreadsheet.
pub struct SheetClient {
    http: reqwest::Client,
    config: SheetConfig,
}

impl SheetClient {
    pub fn new(config: SheetConfig) -> Self {
        SheetClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Read-path convenience with the degrading contract: failures are
    /// logged and become an empty row list, invisible to the end user.
    pub async fn fetch_rows_or_empty(&self, sheet: &str) -> Vec<RawRow> {
        match self.fetch_rows(sheet).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(sheet, error = %e, "sheet fetch failed, treating as empty");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SheetSource for SheetClient {
    async fn fetch_rows(&self, sheet: &str) -> SyncResult<Vec<RawRow>> {
        let response = self
            .http
            .get(self.config.export_url())
            .query(&[("tqx", "out:csv"), ("sheet", sheet)])
            .send()
            .await
            .map_err(|source| SyncError::Fetch {
                sheet: sheet.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                sheet: sheet.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(|source| SyncError::Fetch {
            sheet: sheet.to_string(),
            source,
        })?;

        let rows = parse_csv(&text);
        debug!(sheet, rows = rows.len(), "sheet fetched");
        Ok(rows)
    }

    async fn submit(&self, payload: &ReportPayload) -> SyncResult<bool> {
        let body = serde_json::to_string(payload)?;

        // text/plain keeps the Apps Script endpoint from demanding a
        // CORS preflight; the body is still JSON.
        let response = self
            .http
            .post(&self.config.script_url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(SyncError::Submit)?;

        Ok(response.status().is_success())
    }
}
