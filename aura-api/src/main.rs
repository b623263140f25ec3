//! Aura API - Main entry point.

use anyhow::Result;
use aura_common::config::Config;
use aura_common::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load_with_env()?;

    // Initialize logging
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Aura API v{}", env!("CARGO_PKG_VERSION"));

    // Start the relay server
    aura_api::start_server(&config).await
}
