//! JSON API behind the dashboard page.

use axum::{extract::State, response::IntoResponse, Json};
use censusboard_common::error::ApiError;
use censusboard_view::figures::{institutions_figure, overview_figure, pie_figure};
use censusboard_view::DetailView;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{AppEvent, SharedState};

// === API Types ===

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub state: String,
}

/// Everything the page needs to redraw the drill-down row.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub detail: DetailView,
    pub pie_figure: Value,
    pub institutions_figure: Value,
    pub institutions_visible: bool,
}

impl SelectionResponse {
    pub fn from_detail(detail: DetailView) -> Self {
        Self {
            pie_figure: pie_figure(&detail),
            institutions_figure: institutions_figure(&detail),
            institutions_visible: !detail.is_empty(),
            detail,
        }
    }
}

// === API Endpoints ===

/// GET /api/states - Projection rows, one per state
pub async fn api_states(State(state): State<SharedState>) -> impl IntoResponse {
    let rows = state.dashboard.read().await.rows().to_vec();
    Json(rows)
}

/// GET /api/figures/overview - Overview bar chart
pub async fn api_overview_figure(State(state): State<SharedState>) -> impl IntoResponse {
    let figure = overview_figure(state.dashboard.read().await.rows(), state.barmode);
    Json(figure)
}

/// GET /api/selection - Drill-down for the current selection
pub async fn api_current_selection(
    State(state): State<SharedState>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let detail = state.dashboard.read().await.current_detail()?;
    Ok(Json(SelectionResponse::from_detail(detail)))
}

/// POST /api/selection - Select a state
pub async fn api_select_state(
    State(state): State<SharedState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let detail = state.dashboard.write().await.on_state_selected(&req.state)?;
    state.publish(AppEvent::StateSelected { state: req.state, at: Utc::now() });
    Ok(Json(SelectionResponse::from_detail(detail)))
}

/// GET /api/integrity - Records whose Total differs from the category sum
pub async fn api_integrity(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.integrity.clone())
}
