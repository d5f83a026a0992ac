//! # Starkline Query
//!
//! Query cache and query/mutation builders for Starkline.
//!
//! The cache is an explicitly constructed, injected object — there is no
//! global instance; hosts build one at their composition root and hand it to
//! the connection layer. Builder modules pair a structured query key with a
//! function that validates its arguments synchronously before any protocol
//! call:
//!
//! - **connect / disconnect**: mutation keys scoped by chain id
//! - **nonce**: nonce-for-address query
//! - **deploy_account**: account deployment mutation
//! - **paymaster**: fee-sponsored transaction mutation
//! - **wallet_request**: generic typed wallet request

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod cache;
pub mod connect;
pub mod deploy_account;
pub mod disconnect;
pub mod nonce;
pub mod paymaster;
pub mod wallet_request;

pub use cache::{CacheConfig, QueryCache};
pub use connect::connect_mutation_key;
pub use deploy_account::{deploy_account, DeployAccountVariables};
pub use disconnect::disconnect_mutation_key;
pub use nonce::{nonce_for_address, nonce_for_address_query_key};
pub use paymaster::{
    paymaster_send_transaction, PaymasterOptions, PaymasterSendVariables,
};
pub use wallet_request::{wallet_request, wallet_request_mutation_key};
