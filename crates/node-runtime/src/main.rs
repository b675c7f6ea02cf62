//! # Bounty-Board Node
//!
//! Entry point for the escrow coordinator.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration from `BB_*` environment variables
//! 3. In production mode, validate the configuration (fail closed on any
//!    permissive development strategy)
//! 4. Wire subsystems through the container
//! 5. Report escrow status and wait for shutdown
//!
//! The HTTP transport is a separate deployment concern; it drives the
//! `TaskLifecycleApi` exposed by the container.

use anyhow::{Context, Result};
use node_runtime::{AppContainer, NodeConfig};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = NodeConfig::from_env();
    if config.production {
        config
            .validate_for_production()
            .context("Refusing to start with a development configuration")?;
    } else {
        warn!("Running in development mode; do not handle real funds");
    }

    info!("===========================================");
    info!("  Bounty-Board Node v0.1.0");
    info!("===========================================");

    let container =
        AppContainer::new(config).context("Failed to wire subsystems")?;
    let lifecycle = std::sync::Arc::clone(&container.lifecycle);

    let info = {
        use bb_06_lifecycle::TaskLifecycleApi;
        lifecycle.escrow_info().await?
    };
    info!(
        escrow = %info.escrow_address,
        fee_percent = info.fee_rate_percent,
        configured = info.configured,
        "Escrow ready"
    );
    info!(data_dir = %container.config.storage.data_dir.display(), "Node is running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received; store is durable, exiting");
    Ok(())
}
