use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::emulator::TokenRegistry;
use crate::error::RpcError;

/// Handler for net_version
/// Returns the network version (chain ID as decimal string).
pub fn version(config: &Config) -> Result<Value, RpcError> {
    let version = config.chain_id.to_string();
    debug!("net_version -> {}", version);
    Ok(Value::String(version))
}

/// Static network description served on `GET /` for manual wallet setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub network: String,
    pub rpc_url: String,
    pub native_token: String,
}

pub fn network_info(config: &Config, tokens: &TokenRegistry) -> NetworkInfo {
    NetworkInfo {
        chain_id: config.chain_id,
        network: config.network_name.clone(),
        rpc_url: config.rpc_url.clone(),
        native_token: tokens.native().symbol.unwrap_or_default(),
    }
}
