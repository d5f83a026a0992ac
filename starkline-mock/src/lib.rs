//! # Starkline Mock
//!
//! A fully scriptable in-memory wallet implementing the Starkline capability
//! surface, for tests and demos that must not touch a real wallet.
//!
//! The mock supports:
//!
//! - **Failure injection**: reject connects, requests, or declares on demand
//! - **Wallet-driven changes**: switch chains and accounts as if the user did
//! - **Recording accounts**: every execute/declare/sign is captured for
//!   assertions
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use starkline_core::traits::{Account, Wallet};
//! use starkline_core::Address;
//! use starkline_mock::{MockAccount, MockWallet, MockWalletAccounts, MockWalletOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> starkline_core::Result<()> {
//! let account: Arc<dyn Account> = Arc::new(MockAccount::new(Address::parse("0x51")?));
//! let wallet = MockWallet::new(
//!     MockWalletAccounts {
//!         sepolia: vec![account.clone()],
//!         mainnet: vec![account],
//!     },
//!     MockWalletOptions::default(),
//! )?;
//!
//! let accounts = wallet.connect(false).await?;
//! assert_eq!(accounts.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod account;
pub mod emitter;
pub mod wallet;

pub use account::MockAccount;
pub use emitter::ChangeEmitter;
pub use wallet::{MockWallet, MockWalletAccounts, MockWalletOptions};
