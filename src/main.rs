// ==========================================
// BVCR điện lạnh - sync diagnostic binary
// ==========================================
// Pulls the full dataset once and reports what came back. Useful for
// checking spreadsheet connectivity and sheet contents from a shell.
// ==========================================

use chrono::Duration;

use dienlanh_sync::domain::MachineStatus;
use dienlanh_sync::sheets::Aggregator;
use dienlanh_sync::{logging, SheetClient, SheetConfig};

#[tokio::main]
async fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", dienlanh_sync::APP_NAME, dienlanh_sync::VERSION);
    tracing::info!("==================================================");

    let config = SheetConfig::from_env();
    tracing::info!(spreadsheet = %config.spreadsheet_id, "using spreadsheet");

    let aggregator = Aggregator::new(SheetClient::new(config));
    let dataset = aggregator.load_all().await;

    if dataset.equipments.is_empty() && dataset.users.is_empty() && dataset.history.is_empty() {
        tracing::warn!("dataset came back empty, check connectivity and sheet names");
        return;
    }

    tracing::info!(
        equipments = dataset.equipments.len(),
        users = dataset.users.len(),
        history = dataset.history.len(),
        "dataset loaded"
    );

    for eq in &dataset.equipments {
        if eq.status == MachineStatus::Broken {
            tracing::warn!(id = %eq.id, area = %eq.area, "equipment reported broken");
        }
    }

    let incidents = dataset.recent_incident_count(Duration::hours(24));
    tracing::info!(incidents, "incidents in the last 24h");
}
