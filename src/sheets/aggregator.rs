// ==========================================
// BVCR điện lạnh - data aggregator
// ==========================================
// Fetches the five sheets concurrently and assembles the application
// dataset. Fail-together: if any one fetch fails, the whole dataset
// is served empty rather than partially populated.
// ==========================================

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::domain::{Equipment, EquipmentId, EquipmentType, HistoryRecord, User};
use crate::importer::{has_identifier, to_equipment, to_history_record, to_user, RawRow, SyncResult};
use crate::sheets::client::SheetSource;

/// Accounts sheet tab name.
pub const ACCOUNT_SHEET: &str = "tk";

/// History (equipment log) sheet tab name.
pub const HISTORY_SHEET: &str = "NHAT_KY_THIET_BI";

/// The unified application dataset, rebuilt in full on every load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub equipments: Vec<Equipment>,
    pub users: Vec<User>,
    pub history: Vec<HistoryRecord>,
}

impl DataSet {
    /// Look an equipment record up by its prefixed id.
    pub fn find_equipment(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.equipments.iter().find(|e| &e.id == id)
    }

    /// Plaintext credential check against the accounts sheet.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.matches_credentials(username, password))
    }

    /// Incidents reported within `window` of now, for the leader
    /// notification badge.
    pub fn recent_incident_count(&self, window: Duration) -> usize {
        self.history
            .iter()
            .filter(|r| r.is_recent_incident(window))
            .count()
    }
}

/// Aggregates the equipment, accounts and history sheets behind one
/// [`SheetSource`].
pub struct Aggregator<S> {
    source: S,
}

impl<S: SheetSource> Aggregator<S> {
    pub fn new(source: S) -> Self {
        Aggregator { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load everything. Any fetch failure collapses the result to an
    /// empty dataset — the caller sees empty lists, never a partial
    /// merge, and only the log knows why.
    pub async fn load_all(&self) -> DataSet {
        match self.try_load_all().await {
            Ok(dataset) => {
                info!(
                    equipments = dataset.equipments.len(),
                    users = dataset.users.len(),
                    history = dataset.history.len(),
                    "data sync complete"
                );
                dataset
            }
            Err(e) => {
                error!(error = %e, "data sync failed, serving empty dataset");
                DataSet::default()
            }
        }
    }

    async fn try_load_all(&self) -> SyncResult<DataSet> {
        // Five independent fetches in flight at once; results are only
        // combined after all have settled.
        let (ml, mnu, tl, accounts, history) = futures::try_join!(
            self.source.fetch_rows(EquipmentType::Ml.sheet_name()),
            self.source.fetch_rows(EquipmentType::Mnu.sheet_name()),
            self.source.fetch_rows(EquipmentType::Tl.sheet_name()),
            self.source.fetch_rows(ACCOUNT_SHEET),
            self.source.fetch_rows(HISTORY_SHEET),
        )?;

        // Fixed concatenation order: ML, MNU, TL. No cross-sheet
        // dedup, no sorting; presentation layers filter as needed.
        let mut equipments = Vec::new();
        for (kind, rows) in [
            (EquipmentType::Ml, &ml),
            (EquipmentType::Mnu, &mnu),
            (EquipmentType::Tl, &tl),
        ] {
            equipments.extend(
                rows.iter()
                    .filter(|row| has_identifier(row, kind))
                    .map(|row| to_equipment(row, kind)),
            );
        }

        Ok(DataSet {
            equipments,
            users: accounts.iter().map(to_user).collect(),
            history: map_history(&history),
        })
    }

    /// Refresh the history sheet alone (after a successful submit).
    /// Unlike [`load_all`](Self::load_all) this degrades to an empty
    /// list on failure instead of touching the rest of the dataset.
    pub async fn fetch_history(&self) -> Vec<HistoryRecord> {
        match self.source.fetch_rows(HISTORY_SHEET).await {
            Ok(rows) => map_history(&rows),
            Err(e) => {
                warn!(error = %e, "history refresh failed, keeping empty");
                Vec::new()
            }
        }
    }
}

/// Map history rows and reverse them: the sheet appends
/// chronologically, the app wants the most recent report first. A bad
/// date in one row degrades that row's timestamp only.
fn map_history(rows: &[RawRow]) -> Vec<HistoryRecord> {
    let mut records: Vec<HistoryRecord> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| to_history_record(row, index))
        .collect();
    records.reverse();
    records
}
