//! JSON-RPC method routing.
//!
//! [`Dispatcher`] owns the node's state (configuration, token registry and
//! ledger) and maps each method name to a handler in [`eth`] or [`net`].
//! Handlers run synchronously to completion and return either a result value
//! or an [`RpcError`]; the transport turns that into a response envelope.

pub mod eth;
pub mod net;

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::emulator::{Ledger, TokenRegistry};
use crate::error::RpcError;

pub use net::NetworkInfo;

pub struct Dispatcher {
    config: Config,
    tokens: TokenRegistry,
    ledger: Ledger,
}

impl Dispatcher {
    pub fn new(config: Config, tokens: TokenRegistry, ledger: Ledger) -> Self {
        Self {
            config,
            tokens,
            ledger,
        }
    }

    /// Builtin tokens and the seeded dev ledger.
    pub fn with_defaults(config: Config) -> Self {
        let tokens = TokenRegistry::builtin();
        let ledger = Ledger::seeded(&tokens);
        Self::new(config, tokens, ledger)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn network_info(&self) -> NetworkInfo {
        net::network_info(&self.config, &self.tokens)
    }

    /// Run the handler registered for `method`.
    pub fn dispatch(&self, method: &str, params: &[Value]) -> Result<Value, RpcError> {
        debug!("dispatch: method={} params={}", method, params.len());
        match method {
            "eth_chainId" => eth::chain_id(&self.config),
            "net_version" => net::version(&self.config),
            "eth_blockNumber" => eth::block_number(),
            "eth_getBlockByNumber" => eth::get_block_by_number(params),
            "eth_getBalance" => eth::get_balance(&self.ledger, &self.tokens, params),
            "eth_sendTransaction" => eth::send_transaction(&self.ledger, &self.tokens, params),
            "eth_call" => eth::call(&self.ledger, &self.tokens, params),
            "eth_gasPrice" => eth::gas_price(),
            "eth_estimateGas" => eth::estimate_gas(),
            other => Err(RpcError::UnsupportedMethod(other.to_string())),
        }
    }
}
