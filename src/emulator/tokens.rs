use std::collections::HashMap;

use alloy_primitives::{address, Address};

/// Reserved address standing in for the chain's native currency.
pub const NATIVE_TOKEN_ADDRESS: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// Decimals assumed for the native token and for any unregistered contract.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Static description of a token known to the mock node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub address: Address,
    pub symbol: Option<String>,
    pub decimals: u8,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl TokenDescriptor {
    fn known(address: Address, symbol: &str, decimals: u8, name: &str, image: &str) -> Self {
        Self {
            address,
            symbol: Some(symbol.to_string()),
            decimals,
            name: Some(name.to_string()),
            image: Some(image.to_string()),
        }
    }

    /// Placeholder for a contract the registry has never heard of.
    pub fn unknown(address: Address) -> Self {
        Self {
            address,
            symbol: None,
            decimals: DEFAULT_DECIMALS,
            name: None,
            image: None,
        }
    }
}

/// Read-only token reference data, built once at startup.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<Address, TokenDescriptor>,
    native: Address,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TokenRegistry {
    /// Build a registry from descriptors. `native` must be one of them.
    pub fn new(tokens: impl IntoIterator<Item = TokenDescriptor>, native: Address) -> Self {
        let tokens = tokens.into_iter().map(|t| (t.address, t)).collect();
        Self { tokens, native }
    }

    /// ETH plus the handful of mainnet ERC-20s a wallet usually probes for.
    pub fn builtin() -> Self {
        let tokens = vec![
            TokenDescriptor::known(
                NATIVE_TOKEN_ADDRESS,
                "ETH",
                18,
                "Ethereum",
                "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            ),
            TokenDescriptor::known(
                address!("dac17f958d2ee523a2206206994597c13d831ec6"),
                "USDT",
                6,
                "Tether USD",
                "https://assets.coingecko.com/coins/images/325/large/Tether.png",
            ),
            TokenDescriptor::known(
                address!("6b175474e89094c44da98b954eedeac495271d05"),
                "BTC",
                8,
                "Bitcoin",
                "https://s2.coinmarketcap.com/static/img/coins/64x64/1.png",
            ),
            TokenDescriptor::known(
                address!("50327c6c5a14dcba7072724f5cfffeb1b69cca10"),
                "TRX",
                6,
                "TRX",
                "https://assets.coingecko.com/coins/images/1094/large/tron-logo.png",
            ),
            TokenDescriptor::known(
                address!("B8c77482e45F1F44dE1745F52C74426C631bDD51"),
                "BNB",
                18,
                "BNB",
                "https://assets.coingecko.com/coins/images/825/large/bnb-icon2_2x.png",
            ),
        ];
        Self::new(tokens, NATIVE_TOKEN_ADDRESS)
    }

    /// Descriptor for `token`, or an 18-decimals placeholder if unregistered.
    pub fn describe(&self, token: &Address) -> TokenDescriptor {
        self.tokens
            .get(token)
            .cloned()
            .unwrap_or_else(|| TokenDescriptor::unknown(*token))
    }

    pub fn is_registered(&self, token: &Address) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn native(&self) -> TokenDescriptor {
        self.describe(&self.native)
    }

    pub fn native_address(&self) -> Address {
        self.native
    }

    /// Registered token addresses, in no particular order.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.tokens.keys()
    }
}
