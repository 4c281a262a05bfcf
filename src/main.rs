//! Mock Ethereum JSON-RPC node
//!
//! Entry point. Loads configuration from environment/.env file, prints the
//! wallet setup details and serves JSON-RPC on the configured port.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mock_evm_rpc::config::Config;
use mock_evm_rpc::emulator::{TokenRegistry, DEV_RECIPIENT, DEV_WALLET};
use mock_evm_rpc::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    let native = TokenRegistry::builtin().native();

    info!("=== Mock EVM RPC Node ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Configure your wallet with these settings:");
    info!("  Network Name: {}", config.network_name);
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Chain ID: {} ({})", config.chain_id, config.chain_id_hex());
    info!("  Currency Symbol: {}", native.symbol.as_deref().unwrap_or_default());
    info!("Dev wallet: {}", DEV_WALLET);
    info!("Dev recipient: {}", DEV_RECIPIENT);
    info!("");

    start_server(config).await?;

    Ok(())
}
