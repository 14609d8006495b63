//! Shared application state for the web server.

use std::sync::Arc;

use censusboard_common::config::{BarMode, DashboardConfig};
use censusboard_common::dataset::load_dataset;
use censusboard_common::entities::StateRecord;
use censusboard_common::error::Result;
use censusboard_view::integrity::{verify_totals, TotalMismatch};
use censusboard_view::Dashboard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};
use tracing::info;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A state was selected in the overview chart
    StateSelected { state: String, at: DateTime<Utc> },
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Records, projection and the current selection. Writers hold the lock
    /// for one synchronous recomputation.
    pub dashboard: RwLock<Dashboard>,
    pub barmode: BarMode,
    /// Totals mismatches found at load.
    pub integrity: Vec<TotalMismatch>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(records: Vec<StateRecord>, barmode: BarMode, integrity: Vec<TotalMismatch>) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            dashboard: RwLock::new(Dashboard::new(records)),
            barmode,
            integrity,
            event_tx,
        }
    }

    /// Load the configured dataset and build the dashboard.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let records = load_dataset(&config.dataset.source)?;
        let integrity = verify_totals(&records, config.dataset.enforce_totals)?;
        info!(
            source = %config.dataset.source,
            records = records.len(),
            mismatched_totals = integrity.len(),
            "Dataset ready"
        );
        Ok(Self::new(records, config.charts.barmode, integrity))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Send to SSE subscribers. Having none is not an error.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

pub type SharedState = Arc<AppState>;
