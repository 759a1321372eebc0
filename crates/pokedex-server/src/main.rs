//! Pokedex HTTP server
//!
//! Usage: `pokedex-server [config.ron]` (default `config/pokedex.ron`).
//! Log filtering follows `RUST_LOG`.

use pokedex_server::{serve, AppState, Config, ConfigError};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/pokedex.ron".to_string());

    tracing::info!(path = %config_path, "Loading configuration");
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) => {
            tracing::warn!(error = %e, "No configuration file; using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    let addrs = config.listen_addrs()?;
    tracing::info!(policy = ?config.load_policy, data = %config.data_path, "Configuration loaded");

    let state = Arc::new(AppState::initialize(config).await?);

    let mut handles = Vec::new();
    for addr in addrs {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            if let Err(e) = serve(state, addr).await {
                tracing::error!(%addr, error = %e, "Listener failed");
            }
        }));
    }

    tracing::info!("Server started. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    for handle in handles {
        handle.abort();
    }
    Ok(())
}
