//! # Starkline Core
//!
//! Core types, errors, and wallet capability traits for Starkline.
//!
//! This crate provides the foundational building blocks used by all other
//! Starkline crates:
//!
//! - **Chains**: network definitions and wallet-standard chain identifiers
//! - **Types**: addresses, calls, transaction parameters, change events
//! - **Requests**: the closed set of typed wallet request/response pairs
//! - **Errors**: the shared error taxonomy
//! - **Traits**: the wallet, account, and provider capability seams
//!
//! ## Example
//!
//! ```rust
//! use starkline_core::chains::{mainnet, chain_to_wallet_standard};
//!
//! let chain = mainnet();
//! assert_eq!(chain_to_wallet_standard(&chain), "starknet:0x534e5f4d41494e");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod chains;
pub mod error;
pub mod requests;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use chains::{Chain, ChainId, NativeCurrency};
pub use error::{Result, StarklineError};
pub use requests::{RequestMethod, WalletRequest, WalletResponse};
pub use traits::*;
pub use types::*;
