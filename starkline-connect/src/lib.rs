//! # Starkline Connect
//!
//! Connection state reconciliation for Starknet wallets.
//!
//! The [`ConnectionManager`] owns the current chain, provider, paymaster,
//! and account, and updates them reactively as the connected wallet emits
//! change events. State transitions are event-sourced: `connect` and
//! `disconnect` only delegate to the wallet, and every mutation of the
//! observable state is driven by the wallet's `change` events.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use starkline_connect::{
//!     static_paymaster_factory, static_provider_factory, ConnectionConfig, ConnectionManager,
//! };
//! use starkline_core::chains::{mainnet, sepolia};
//!
//! # fn main() -> starkline_core::Result<()> {
//! let manager = ConnectionManager::new(ConnectionConfig::new(
//!     vec![sepolia(), mainnet()],
//!     static_provider_factory(),
//!     static_paymaster_factory(),
//! ))?;
//!
//! assert_eq!(manager.state().chain.id, sepolia().id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod account;
pub mod adapter;
pub mod config;
pub mod facade;
pub mod manager;
pub mod providers;
pub mod state;

pub use account::WalletAccount;
pub use config::ConnectionConfig;
pub use facade::AccountSnapshot;
pub use manager::ConnectionManager;
pub use providers::{
    static_paymaster_factory, static_provider_factory, StaticPaymaster, StaticProvider,
};
pub use state::{AccountStatus, ConnectionState};
