//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    api::{api_states, api_overview_figure, api_current_selection, api_select_state, api_integrity},
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    build_router_shared(shared)
}

/// Same as [`build_router`], for callers that keep their own handle on the state.
pub fn build_router_shared(shared: SharedState) -> Router {
    Router::new()
        // Page
        .route("/", get(dashboard))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/states",            get(api_states))
        .route("/api/figures/overview",  get(api_overview_figure))
        .route("/api/selection",         get(api_current_selection).post(api_select_state))
        .route("/api/integrity",         get(api_integrity))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
