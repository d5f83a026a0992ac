//! Key builder for the disconnect mutation.

use serde_json::{json, Value};

use starkline_core::chains::ChainId;

/// Mutation key for disconnecting the active wallet on the given chain.
pub fn disconnect_mutation_key(chain_id: ChainId) -> Value {
    json!([{ "entity": "disconnect", "chainId": format!("{chain_id:#x}") }])
}
