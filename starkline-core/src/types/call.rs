//! Call and typed-data shapes.
//!
//! Two call representations exist on purpose: [`RequestCall`] is the
//! snake_case wire shape carried inside `wallet_addInvokeTransaction`
//! parameters, [`Call`] is the shape the SDK account seam consumes. Wallets
//! translate between the two at the protocol boundary.

use serde::{Deserialize, Serialize};

use super::Address;

/// A contract call in the SDK shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Target contract.
    pub contract_address: Address,
    /// Entry point selector name.
    pub entrypoint: String,
    /// Felt calldata.
    pub calldata: Vec<String>,
}

/// A contract call in the wallet-standard wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCall {
    /// Target contract, as the wallet formatted it.
    pub contract_address: String,
    /// Entry point selector name.
    pub entry_point: String,
    /// Felt calldata.
    #[serde(default)]
    pub calldata: Vec<String>,
}

/// EIP-712-style typed data for `wallet_signTypedData`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedData {
    /// Type definitions.
    pub types: serde_json::Value,
    /// Name of the primary type.
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    /// Signing domain.
    pub domain: serde_json::Value,
    /// Message payload.
    pub message: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_call_wire_shape() {
        let json = r#"{
            "contract_address": "0x49d3",
            "entry_point": "transfer",
            "calldata": ["0x1", "0x2"]
        }"#;
        let call: RequestCall = serde_json::from_str(json).unwrap();
        assert_eq!(call.entry_point, "transfer");
        assert_eq!(call.calldata.len(), 2);
    }

    #[test]
    fn test_request_call_calldata_defaults_empty() {
        let json = r#"{"contract_address": "0x1", "entry_point": "mint"}"#;
        let call: RequestCall = serde_json::from_str(json).unwrap();
        assert!(call.calldata.is_empty());
    }

    #[test]
    fn test_typed_data_primary_type_rename() {
        let json = r#"{
            "types": {},
            "primaryType": "Transfer",
            "domain": {"name": "starkline"},
            "message": {}
        }"#;
        let data: TypedData = serde_json::from_str(json).unwrap();
        assert_eq!(data.primary_type, "Transfer");
    }
}
