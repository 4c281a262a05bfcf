use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::{address, Address};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, info};

use super::tokens::TokenRegistry;
use crate::error::RpcError;

/// Pre-funded wallet most wallet integrations are pointed at.
pub const DEV_WALLET: Address = address!("CCC324E27Aa67bd2DcC844E45cFd1fBA3A670340");
/// Empty counterparty so the dev wallet has somewhere to send funds.
pub const DEV_RECIPIENT: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

/// account -> token -> balance in whole token units
type Balances = HashMap<Address, HashMap<Address, BigUint>>;

/// In-memory account/token balance table.
///
/// The set of accounts and tokens is fixed at construction; transfers only
/// move value between existing entries.
#[derive(Debug)]
pub struct Ledger {
    balances: Mutex<Balances>,
}

impl Ledger {
    /// Build a ledger for `accounts`, giving each an entry for every token in
    /// `tokens`. Seed balances for tokens outside `tokens` are ignored.
    pub fn new<A, B>(tokens: &[Address], accounts: A) -> Self
    where
        A: IntoIterator<Item = (Address, B)>,
        B: IntoIterator<Item = (Address, BigUint)>,
    {
        let mut balances = Balances::new();
        for (account, seed) in accounts {
            let mut entry: HashMap<Address, BigUint> =
                tokens.iter().map(|t| (*t, BigUint::zero())).collect();
            for (token, amount) in seed {
                if let Some(slot) = entry.get_mut(&token) {
                    *slot = amount;
                }
            }
            balances.insert(account, entry);
        }
        Self {
            balances: Mutex::new(balances),
        }
    }

    /// The dev wallet and its counterparty, funded with the default balances.
    pub fn seeded(registry: &TokenRegistry) -> Self {
        let tokens: Vec<Address> = registry.addresses().copied().collect();
        let wallet = vec![
            (registry.native_address(), BigUint::from(999_999_998u64)),
            (address!("dac17f958d2ee523a2206206994597c13d831ec6"), BigUint::from(410_981u64)),
            (address!("6b175474e89094c44da98b954eedeac495271d05"), BigUint::from(999_999_975u64)),
            (address!("50327c6c5a14dcba7072724f5cfffeb1b69cca10"), BigUint::from(804_500_000_000u64)),
            (address!("B8c77482e45F1F44dE1745F52C74426C631bDD51"), BigUint::from(34u64)),
        ];
        let ledger = Self::new(&tokens, vec![(DEV_WALLET, wallet), (DEV_RECIPIENT, Vec::new())]);
        info!("Seeded ledger with {} accounts", ledger.accounts().len());
        ledger
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Balances> {
        self.balances.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Balance of `account` in `token`, zero when either is unknown.
    pub fn balance(&self, account: &Address, token: &Address) -> BigUint {
        self.lock()
            .get(account)
            .and_then(|tokens| tokens.get(token))
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, account: &Address) -> bool {
        self.lock().contains_key(account)
    }

    /// Seeded account addresses, sorted.
    pub fn accounts(&self) -> Vec<Address> {
        let mut accounts: Vec<Address> = self.lock().keys().copied().collect();
        accounts.sort();
        accounts
    }

    /// Move `amount` whole units of `token` from `from` to `to`.
    ///
    /// Runs under a single lock acquisition: on error nothing is modified.
    pub fn transfer(
        &self,
        from: &Address,
        to: &Address,
        token: &Address,
        amount: &BigUint,
    ) -> Result<(), RpcError> {
        let mut balances = self.lock();

        for account in [from, to] {
            if !balances.contains_key(account) {
                return Err(RpcError::UnknownAccount(*account));
            }
        }

        let available = balances
            .get(from)
            .and_then(|tokens| tokens.get(token))
            .cloned()
            .unwrap_or_default();
        if &available < amount {
            return Err(RpcError::InsufficientBalance {
                available,
                requested: amount.clone(),
            });
        }

        // Untracked tokens have no entries to move; only a zero amount gets here.
        if amount.is_zero() || from == to {
            return Ok(());
        }

        // both entries must exist before either side is touched
        for account in [from, to] {
            if !balances.get(account).is_some_and(|t| t.contains_key(token)) {
                return Err(RpcError::UntrackedToken {
                    account: *account,
                    token: *token,
                });
            }
        }
        if let Some(slot) = balances.get_mut(from).and_then(|t| t.get_mut(token)) {
            *slot -= amount;
        }
        if let Some(slot) = balances.get_mut(to).and_then(|t| t.get_mut(token)) {
            *slot += amount;
        }

        debug!("transfer {} of {} from {} to {}", amount, token, from, to);
        Ok(())
    }
}
