//! Server-Sent Events (SSE) streaming of selection changes, so every open
//! tab follows the current drill-down.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::state::{AppEvent, SharedState};

fn to_sse(event: &AppEvent) -> Option<Event> {
    let name = match event {
        AppEvent::StateSelected { .. } => "state_selected",
    };
    Event::default().event(name).json_data(event).ok()
}

/// GET /api/events
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe()).filter_map(|received| match received {
        Ok(event) => to_sse(&event).map(Ok),
        Err(lagged) => {
            // A slow tab missed events; the next one carries the full state name.
            debug!(error = %lagged, "SSE subscriber lagged");
            None
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping"))
}
