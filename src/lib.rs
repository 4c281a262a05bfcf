//! Mock Ethereum JSON-RPC node
//!
//! This crate implements a small JSON-RPC server that answers the subset of
//! `eth_*` / `net_*` calls a wallet needs during local development. Balances
//! live in an in-memory ledger; there are no blocks, no mining, and no
//! signature checks.
//!
//! # Architecture
//!
//! ```text
//! Wallet (MetaMask/ethers.js)
//!     |
//!     | HTTP POST / (JSON-RPC 2.0)
//!     v
//! server      -- envelopes, CORS, HTTP status
//!     |
//!     v
//! methods     -- Dispatcher: method name -> handler
//!     |
//!     +--> translator  -- call-data decoding, unit scaling
//!     +--> emulator    -- token registry, ledger, static block
//! ```
//!
//! # Modules
//!
//! - `config` - Environment and configuration management
//! - `error` - Handler error taxonomy and JSON-RPC codes
//! - `server` - HTTP routes and JSON-RPC envelopes
//! - `methods` - Method dispatcher and handlers (eth, net)
//! - `translator` - Call-data decoding and base/whole unit conversion
//! - `emulator` - Token registry, balance ledger, static block

pub mod config;
pub mod emulator;
pub mod error;
pub mod methods;
pub mod server;
pub mod translator;
