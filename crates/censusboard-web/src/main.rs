//! censusboard web server
//!
//! Run with: cargo run -p censusboard-web

use std::time::Duration;

use censusboard_common::DashboardConfig;
use censusboard_web::state::AppState;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting censusboard...");

    let config = DashboardConfig::load()?;
    let state = AppState::from_config(&config)?;

    let app = censusboard_web::router::build_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let url = config.server.url();
    info!("Server listening on http://{}", addr);

    if config.server.open_browser {
        let _ = censusboard_web::browser::open_when_ready(
            url,
            Duration::from_millis(config.server.open_delay_ms),
        );
    } else {
        info!("Open your browser and navigate to {}", url);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            // No signal handler: run until killed.
            tracing::warn!(error = %e, "Could not listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}
