use alloy_primitives::Address;
use alloy_sol_types::SolValue;
use rand::RngCore;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::Config;
use crate::emulator::block::STATIC_BLOCK_NUMBER;
use crate::emulator::{EvmBlock, Ledger, TokenRegistry};
use crate::error::RpcError;
use crate::translator::{
    decode_calldata, parse_address, parse_quantity, to_abi_word, to_base_units, to_hex_quantity,
    to_whole_units, DecodedCall,
};

/// Handler for eth_chainId
pub fn chain_id(config: &Config) -> Result<Value, RpcError> {
    let id = config.chain_id_hex();
    debug!("eth_chainId -> {}", id);
    Ok(Value::String(id))
}

/// Handler for eth_blockNumber
pub fn block_number() -> Result<Value, RpcError> {
    Ok(Value::String(format!("0x{:x}", STATIC_BLOCK_NUMBER)))
}

/// Handler for eth_getBlockByNumber. The requested number is ignored.
pub fn get_block_by_number(params: &[Value]) -> Result<Value, RpcError> {
    debug!("eth_getBlockByNumber: param={:?}", params.first());
    serde_json::to_value(EvmBlock::static_block()).map_err(|e| RpcError::Internal(e.to_string()))
}

/// Handler for eth_getBalance. Any address string the ledger does not hold,
/// malformed ones included, reads as `0x0`; only a missing or non-string
/// parameter is rejected.
pub fn get_balance(
    ledger: &Ledger,
    tokens: &TokenRegistry,
    params: &[Value],
) -> Result<Value, RpcError> {
    let address = params
        .first()
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params("eth_getBalance requires address"))?;
    let account = match parse_address(address) {
        Ok(account) => account,
        Err(e) => {
            debug!("eth_getBalance: {} -> 0x0 ({})", address, e);
            return Ok(Value::String("0x0".to_string()));
        }
    };

    let native = tokens.native();
    let balance = ledger.balance(&account, &native.address);
    let balance_wei = to_base_units(&balance, native.decimals);

    debug!(
        "eth_getBalance: {} -> {} {} = {} wei",
        account,
        balance,
        native.symbol.as_deref().unwrap_or_default(),
        balance_wei
    );
    Ok(Value::String(to_hex_quantity(&balance_wei)))
}

/// Handler for eth_sendTransaction: a native-currency transfer between seeded accounts.
pub fn send_transaction(
    ledger: &Ledger,
    tokens: &TokenRegistry,
    params: &[Value],
) -> Result<Value, RpcError> {
    let tx = call_object(params, "eth_sendTransaction")?;
    let from = parse_address(required_str(tx, "from", "eth_sendTransaction")?)?;
    let to = parse_address(required_str(tx, "to", "eth_sendTransaction")?)?;
    let value_wei = parse_quantity(tx.get("value").unwrap_or(&Value::Null))?;

    let native = tokens.native();
    let amount = to_whole_units(&value_wei, native.decimals);

    ledger.transfer(&from, &to, &native.address, &amount)?;

    let tx_hash = mock_transaction_hash();
    info!(
        "eth_sendTransaction: {} -> {} amount={} hash={}",
        from, to, amount, tx_hash
    );
    Ok(Value::String(tx_hash))
}

/// Handler for eth_call. Understands `balanceOf` and `transfer` on any
/// contract address plus a target-less `symbol()` probe.
pub fn call(ledger: &Ledger, tokens: &TokenRegistry, params: &[Value]) -> Result<Value, RpcError> {
    let call_obj = call_object(params, "eth_call")?;

    // empty strings count as absent
    let to = call_obj
        .get("to")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let data = call_obj
        .get("data")
        .or_else(|| call_obj.get("input"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let from = call_obj.get("from").and_then(|v| v.as_str());

    let (to, data) = match (to, data) {
        (Some(to), Some(data)) => (to, data),
        (None, Some(data)) if decode_calldata(data, 0) == DecodedCall::Symbol => {
            let symbol = tokens.native().symbol.unwrap_or_default();
            debug!("eth_call: target-less symbol() -> {}", symbol);
            return Ok(Value::String(format!("0x{}", hex::encode(symbol))));
        }
        _ => return Err(RpcError::invalid_params("eth_call requires 'to' and 'data'")),
    };

    let token = parse_address(to)?;
    let descriptor = tokens.describe(&token);

    match decode_calldata(data, descriptor.decimals) {
        DecodedCall::BalanceOf { account } => {
            let balance = ledger.balance(&account, &token);
            let balance_base = to_base_units(&balance, descriptor.decimals);
            debug!(
                "eth_call: balanceOf({}) on {} -> {} ({} base units)",
                account, token, balance, balance_base
            );
            Ok(Value::String(to_abi_word(&balance_base)))
        }
        DecodedCall::Transfer {
            recipient,
            amount,
            base_amount,
        } => {
            let sender: Address = from
                .ok_or_else(|| RpcError::invalid_params("Sender address required"))
                .and_then(parse_address)?;

            ledger.transfer(&sender, &recipient, &token, &amount)?;

            info!(
                "eth_call: transfer {} {} ({} base units) from {} to {}",
                amount,
                descriptor.symbol.as_deref().unwrap_or("tokens"),
                base_amount,
                sender,
                recipient
            );
            Ok(Value::String(format!("0x{}", hex::encode(true.abi_encode()))))
        }
        DecodedCall::Symbol | DecodedCall::Unrecognized => {
            debug!("eth_call: unhandled call-data on {}, returning empty result", to);
            Ok(Value::String("0x".to_string()))
        }
    }
}

/// Handler for eth_gasPrice
pub fn gas_price() -> Result<Value, RpcError> {
    Ok(Value::String("0x0".to_string()))
}

/// Handler for eth_estimateGas
pub fn estimate_gas() -> Result<Value, RpcError> {
    Ok(Value::String("0x0".to_string()))
}

// --- Helper functions ---

/// First positional parameter as a JSON object.
fn call_object<'a>(
    params: &'a [Value],
    method: &str,
) -> Result<&'a Map<String, Value>, RpcError> {
    params.first().and_then(|v| v.as_object()).ok_or_else(|| {
        RpcError::invalid_params(format!("{} requires call object parameter", method))
    })
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    method: &str,
) -> Result<&'a str, RpcError> {
    obj.get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params(format!("{} requires '{}' field", method, field)))
}

/// Transaction-hash-shaped identifier: the millisecond timestamp's decimal
/// digits followed by random bytes, 32 bytes in total. Not a real hash.
fn mock_transaction_hash() -> String {
    let mut bytes = chrono::Utc::now().timestamp_millis().to_string().into_bytes();
    let mut noise = vec![0u8; 32usize.saturating_sub(bytes.len())];
    rand::thread_rng().fill_bytes(&mut noise);
    bytes.extend(noise);
    bytes.truncate(32);
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_transaction_hash_format() {
        // format check only, the content is random
        let hash = mock_transaction_hash();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 66);
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_call_object_required() {
        assert!(call_object(&[], "eth_call").is_err());
        assert!(call_object(&[Value::String("0x".into())], "eth_call").is_err());
    }
}
