//! Transaction request parameters and results.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::Address;

/// A Sierra contract class as carried on the wire.
///
/// The `abi` field is the serialized JSON string form; wallets parse it into
/// structured data before handing the class to the SDK account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractClass {
    /// Sierra program felts.
    #[serde(default)]
    pub sierra_program: Vec<String>,
    /// Contract class version.
    pub contract_class_version: String,
    /// Entry points grouped by type.
    #[serde(default)]
    pub entry_points_by_type: serde_json::Value,
    /// ABI in serialized string form.
    pub abi: String,
}

impl ContractClass {
    /// Parses the serialized `abi` string into structured form.
    pub fn parse_abi(&self) -> Result<ParsedContractClass> {
        let abi = serde_json::from_str(&self.abi)?;
        Ok(ParsedContractClass {
            sierra_program: self.sierra_program.clone(),
            contract_class_version: self.contract_class_version.clone(),
            entry_points_by_type: self.entry_points_by_type.clone(),
            abi,
        })
    }
}

/// A contract class with the ABI parsed into structured data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContractClass {
    /// Sierra program felts.
    pub sierra_program: Vec<String>,
    /// Contract class version.
    pub contract_class_version: String,
    /// Entry points grouped by type.
    pub entry_points_by_type: serde_json::Value,
    /// Structured ABI.
    pub abi: serde_json::Value,
}

/// Parameters of `wallet_addDeclareTransaction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareParameters {
    /// Hash of the compiled (CASM) class.
    pub compiled_class_hash: String,
    /// Optional precomputed class hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_hash: Option<String>,
    /// The contract class to declare.
    pub contract_class: ContractClass,
}

/// A declare request in the shape the SDK account seam consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Hash of the compiled (CASM) class.
    pub compiled_class_hash: String,
    /// Optional precomputed class hash.
    pub class_hash: Option<String>,
    /// Contract class with parsed ABI.
    pub contract: ParsedContractClass,
}

/// An account deployment request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDeployment {
    /// Class hash of the account contract.
    pub class_hash: String,
    /// Constructor calldata.
    #[serde(default)]
    pub constructor_calldata: Vec<String>,
    /// Address salt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_salt: Option<String>,
    /// Precomputed contract address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

/// Parameters of `wallet_addStarknetChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChainParameters {
    /// Wallet-standard chain id, hex encoded.
    pub chain_id: String,
    /// Human-readable chain name.
    pub chain_name: String,
    /// RPC endpoints of the chain.
    #[serde(default)]
    pub rpc_urls: Vec<String>,
}

/// Parameters of `wallet_watchAsset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetParameters {
    /// Asset type; only `"ERC20"` is meaningful today.
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Token contract address.
    pub address: Address,
    /// Display symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Token decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// A permission granted by the wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    /// Access to the account list.
    #[serde(rename = "accounts")]
    Accounts,
}

/// Result of an invoke transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResult {
    /// Transaction hash.
    pub transaction_hash: String,
}

/// Result of a declare transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareResult {
    /// Transaction hash.
    pub transaction_hash: String,
    /// Hash of the declared class.
    pub class_hash: String,
}

/// Result of an account deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployResult {
    /// Transaction hash.
    pub transaction_hash: String,
    /// Address of the deployed account.
    pub contract_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_abi(abi: &str) -> ContractClass {
        ContractClass {
            sierra_program: vec!["0x1".into()],
            contract_class_version: "0.1.0".into(),
            entry_points_by_type: serde_json::json!({}),
            abi: abi.into(),
        }
    }

    #[test]
    fn test_parse_abi() {
        let class = class_with_abi(r#"[{"type":"function","name":"transfer"}]"#);
        let parsed = class.parse_abi().unwrap();
        assert_eq!(parsed.abi[0]["name"], "transfer");
        assert_eq!(parsed.sierra_program, class.sierra_program);
    }

    #[test]
    fn test_parse_abi_rejects_malformed() {
        let class = class_with_abi("not json");
        assert!(class.parse_abi().is_err());
    }

    #[test]
    fn test_permission_wire_form() {
        let json = serde_json::to_string(&Permission::Accounts).unwrap();
        assert_eq!(json, "\"accounts\"");
    }

    #[test]
    fn test_watch_asset_type_rename() {
        let json = r#"{"type": "ERC20", "address": "0x1"}"#;
        let params: WatchAssetParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.asset_type, "ERC20");
    }
}
