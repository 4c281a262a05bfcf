pub mod block;
pub mod ledger;
pub mod tokens;

pub use block::{block_hash, EvmBlock};
pub use ledger::{Ledger, DEV_RECIPIENT, DEV_WALLET};
pub use tokens::{TokenDescriptor, TokenRegistry, NATIVE_TOKEN_ADDRESS};
