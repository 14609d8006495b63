//! Opens the dashboard in the user's default browser.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Open `url` after `delay`, off the async runtime. Failure only logs: the
/// server stays up and the URL is in the startup log.
pub fn open_when_ready(url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let target = url.clone();
        match tokio::task::spawn_blocking(move || webbrowser::open(&target)).await {
            Ok(Ok(())) => info!(%url, "Opened dashboard in browser"),
            Ok(Err(e)) => warn!(%url, error = %e, "Could not open browser"),
            Err(e) => warn!(error = %e, "Browser launch task failed"),
        }
    })
}
