use std::str::FromStr;

use alloy_primitives::Address;
use num_bigint::BigUint;
use num_traits::{pow, Zero};
use serde_json::Value;

use crate::error::RpcError;

/// `10^decimals` as an arbitrary-precision integer.
pub fn unit_scale(decimals: u8) -> BigUint {
    pow(BigUint::from(10u32), decimals as usize)
}

/// Whole token units -> base units (e.g. ETH -> wei).
pub fn to_base_units(whole: &BigUint, decimals: u8) -> BigUint {
    whole * unit_scale(decimals)
}

/// Base units -> whole token units. The fractional remainder is dropped.
pub fn to_whole_units(base: &BigUint, decimals: u8) -> BigUint {
    base / unit_scale(decimals)
}

/// Render a quantity the way Ethereum JSON-RPC does: `0x`-prefixed, no leading zeros.
pub fn to_hex_quantity(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

/// Render a value as a single left-padded 32-byte ABI word.
pub fn to_abi_word(value: &BigUint) -> String {
    format!("0x{:0>64}", value.to_str_radix(16))
}

/// Parse a JSON-RPC quantity. Accepts `0x` hex strings, decimal strings and JSON integers.
pub fn parse_quantity(value: &Value) -> Result<BigUint, RpcError> {
    match value {
        Value::Null => Ok(BigUint::zero()),
        Value::Number(n) => n
            .as_u64()
            .map(BigUint::from)
            .ok_or_else(|| RpcError::invalid_params(format!("invalid quantity: {}", n))),
        Value::String(s) => {
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
                None => BigUint::parse_bytes(s.as_bytes(), 10),
            };
            parsed.ok_or_else(|| RpcError::invalid_params(format!("invalid quantity: {}", s)))
        }
        other => Err(RpcError::invalid_params(format!("invalid quantity: {}", other))),
    }
}

/// Parse a hex address, ignoring case and checksum.
pub fn parse_address(address: &str) -> Result<Address, RpcError> {
    Address::from_str(&address.to_lowercase())
        .map_err(|e| RpcError::invalid_params(format!("invalid address {}: {}", address, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scaling() {
        let whole = BigUint::from(30u32);
        let wei = to_base_units(&whole, 18);
        assert_eq!(wei.to_string(), "30000000000000000000");
        assert_eq!(to_whole_units(&wei, 18), whole);
    }

    #[test]
    fn test_whole_units_floor() {
        // 1.999999 USDT
        let base = BigUint::from(1_999_999u32);
        assert_eq!(to_whole_units(&base, 6), BigUint::from(1u32));
        assert_eq!(to_whole_units(&BigUint::from(999_999u32), 6), BigUint::zero());
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(to_hex_quantity(&BigUint::zero()), "0x0");
        assert_eq!(to_hex_quantity(&BigUint::from(31337u32)), "0x7a69");
        let word = to_abi_word(&BigUint::from(1u32));
        assert_eq!(word.len(), 66);
        assert!(word.ends_with("01"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&json!("0x1a")).unwrap(), BigUint::from(26u32));
        assert_eq!(parse_quantity(&json!("26")).unwrap(), BigUint::from(26u32));
        assert_eq!(parse_quantity(&json!(26)).unwrap(), BigUint::from(26u32));
        assert_eq!(parse_quantity(&Value::Null).unwrap(), BigUint::zero());
        assert!(parse_quantity(&json!("0x")).is_err());
        assert!(parse_quantity(&json!("0xzz")).is_err());
        assert!(parse_quantity(&json!(true)).is_err());
    }

    #[test]
    fn test_parse_address_case_insensitive() {
        let lower = parse_address("0xccc324e27aa67bd2dcc844e45cfd1fba3a670340").unwrap();
        let mixed = parse_address("0xCCC324E27Aa67bd2DcC844E45cFd1fBA3A670340").unwrap();
        let upper = parse_address("0xCCC324E27AA67BD2DCC844E45CFD1FBA3A670340").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower, upper);
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("not an address").is_err());
    }
}
