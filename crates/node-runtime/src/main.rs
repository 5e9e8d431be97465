//! # Latest-Wins Compute Service
//!
//! Entry point: telemetry, configuration, wiring, then HTTP until Ctrl+C.

use anyhow::{Context, Result};
use lw_telemetry::{init_telemetry, TelemetryConfig};
use node_runtime::{NodeConfig, ServiceContainer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = NodeConfig::from_env();
    info!(
        addr = %config.gateway.http_addr(),
        default_size = config.jobs.default_size,
        max_size = config.jobs.max_size,
        "Configuration loaded"
    );

    let container = ServiceContainer::new(config).context("Failed to build services")?;

    container
        .run(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
