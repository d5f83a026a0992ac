//! Key builder for the connect mutation.

use serde_json::{json, Value};

use starkline_core::chains::ChainId;

/// Mutation key for connecting a wallet on the given chain.
pub fn connect_mutation_key(chain_id: ChainId) -> Value {
    json!([{ "entity": "connect", "chainId": format!("{chain_id:#x}") }])
}
