//! censusboard-view — Dashboard view model.
//! Projects state records into chart rows, resolves the selected state into
//! drill-down detail, and builds the Plotly figures the page renders.

pub mod projection;
pub mod selection;
pub mod dashboard;
pub mod integrity;
pub mod figures;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dashboard::Dashboard;
pub use selection::{BreakdownSlice, DetailView, InstitutionBar, Selection};
