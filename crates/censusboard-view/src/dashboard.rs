//! Owned dashboard state: the immutable records, their projection, and the
//! current selection.

use censusboard_common::entities::{DerivedRow, StateRecord};
use censusboard_common::error::Result;
use tracing::{error, info};

use crate::projection::project;
use crate::selection::{find_record, resolve_detail, DetailView, Selection};

#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<StateRecord>,
    rows: Vec<DerivedRow>,
    selection: Selection,
}

impl Dashboard {
    /// Build the dashboard. The projection is computed here, once.
    pub fn new(records: Vec<StateRecord>) -> Self {
        let rows = project(&records);
        Self {
            records,
            rows,
            selection: Selection::NoSelection,
        }
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle a click on `state` in the overview chart.
    ///
    /// Returns the breakdown, institution listing and title for the state.
    /// An unknown name leaves the current selection untouched.
    pub fn on_state_selected(&mut self, state: &str) -> Result<DetailView> {
        let record = find_record(&self.records, state).inspect_err(|e| {
            error!(state, error = %e, "Selection does not match any loaded record");
        })?;
        let view = DetailView::for_record(record);
        self.selection.select(state);
        info!(state, institutions = view.institutions.len(), "State selected");
        Ok(view)
    }

    pub fn current_detail(&self) -> Result<DetailView> {
        resolve_detail(&self.selection, &self.records)
    }
}
