use alloy_primitives::Address;
use num_bigint::BigUint;
use thiserror::Error;

/// JSON-RPC error code for an unknown method name.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error code used for every other handler failure.
pub const SERVER_ERROR: i64 = -32000;
/// Request body was not valid JSON.
pub const PARSE_ERROR: i64 = -32700;
/// Request body was JSON but not a request object.
pub const INVALID_REQUEST: i64 = -32600;

/// Failures a JSON-RPC handler can report back to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Address not found in ledger: {0}")]
    UnknownAccount(Address),

    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        available: BigUint,
        requested: BigUint,
    },

    #[error("Token {token} not tracked for account {account}")]
    UntrackedToken { account: Address, token: Address },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcError {
    /// JSON-RPC error code carried in the response envelope.
    pub fn code(&self) -> i64 {
        match self {
            RpcError::UnsupportedMethod(_) => METHOD_NOT_FOUND,
            _ => SERVER_ERROR,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        RpcError::InvalidParameters(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RpcError::UnsupportedMethod("eth_foo".into()).code(), -32601);
        assert_eq!(RpcError::invalid_params("missing to").code(), -32000);
        assert_eq!(RpcError::UnknownAccount(Address::ZERO).code(), -32000);
        let err = RpcError::InsufficientBalance {
            available: BigUint::from(1u32),
            requested: BigUint::from(2u32),
        };
        assert_eq!(err.code(), -32000);
        assert!(err.to_string().contains("Insufficient balance"));
        assert_eq!(RpcError::Internal("serde".into()).code(), -32000);
        let untracked = RpcError::UntrackedToken {
            account: Address::ZERO,
            token: Address::ZERO,
        };
        assert_eq!(untracked.code(), -32000);
    }
}
