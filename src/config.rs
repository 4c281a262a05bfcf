use anyhow::{Context, Result};
use std::env;

/// Mock node configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chain ID (decimal)
    pub chain_id: u64,
    /// HTTP server port
    pub port: u16,
    /// Human-readable network name reported by `GET /`
    pub network_name: String,
    /// Public RPC URL reported by `GET /`
    pub rpc_url: String,
    /// Log level
    pub log_level: String,
}

pub const DEFAULT_CHAIN_ID: u64 = 31337;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NETWORK_NAME: &str = "Avlon Blockchain";

impl Default for Config {
    fn default() -> Self {
        Config {
            chain_id: DEFAULT_CHAIN_ID,
            port: DEFAULT_PORT,
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            rpc_url: format!("http://localhost:{}", DEFAULT_PORT),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Call dotenvy::dotenv() before calling this.
    pub fn from_env() -> Result<Self> {
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let chain_id: u64 = env::var("CHAIN_ID")
            .unwrap_or_else(|_| DEFAULT_CHAIN_ID.to_string())
            .parse()
            .context("CHAIN_ID must be a valid u64")?;

        let network_name =
            env::var("NETWORK_NAME").unwrap_or_else(|_| DEFAULT_NETWORK_NAME.to_string());

        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            chain_id,
            port,
            network_name,
            rpc_url,
            log_level,
        })
    }

    /// Return the chain ID as a hex string with 0x prefix
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.chain_id_hex(), "0x7a69");
        assert_eq!(config.rpc_url, "http://localhost:3000");
    }
}
