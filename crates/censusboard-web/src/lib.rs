//! censusboard-web — Web GUI for censusboard
//! Serves the state population dashboard:
//!   - Overview bar chart of population by category
//!   - Click-to-drill-down population pie and institution enrollment chart
//!   - JSON API and SSE selection events behind the page

pub mod router;
pub mod handlers;
pub mod state;
pub mod sse;
pub mod browser;
