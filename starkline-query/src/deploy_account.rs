//! Deploy-account mutation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use starkline_core::error::{Result, StarklineError};
use starkline_core::traits::Account;
use starkline_core::types::{AccountDeployment, DeployResult};

/// Arguments of the deploy-account mutation. All optional at the key level;
/// validated when the mutation runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeployAccountVariables {
    /// Class hash of the account contract to deploy.
    pub class_hash: Option<String>,
    /// Constructor calldata.
    #[serde(default)]
    pub constructor_calldata: Vec<String>,
    /// Address salt.
    pub address_salt: Option<String>,
    /// Precomputed contract address.
    pub contract_address: Option<String>,
}

/// Mutation key for deploying an account contract.
pub fn deploy_account_mutation_key(variables: &DeployAccountVariables) -> Value {
    json!([{
        "entity": "deployAccount",
        "classHash": variables.class_hash,
        "contractAddress": variables.contract_address,
    }])
}

/// Deploys an account contract through the SDK account seam.
///
/// A missing account or class hash fails with a typed error before any
/// protocol call.
pub async fn deploy_account(
    account: Option<&dyn Account>,
    variables: &DeployAccountVariables,
) -> Result<DeployResult> {
    let account = account.ok_or(StarklineError::MissingParameter("account"))?;
    let class_hash = variables
        .class_hash
        .clone()
        .ok_or(StarklineError::MissingParameter("classHash"))?;

    account
        .deploy_account(&AccountDeployment {
            class_hash,
            constructor_calldata: variables.constructor_calldata.clone(),
            address_salt: variables.address_salt.clone(),
            contract_address: variables.contract_address.clone(),
        })
        .await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use starkline_core::types::{
        Address, Call, Declaration, DeclareResult, InvokeResult, TypedData,
    };

    use super::*;

    struct DeployOnlyAccount {
        address: Address,
    }

    #[async_trait]
    impl Account for DeployOnlyAccount {
        fn address(&self) -> &Address {
            &self.address
        }

        async fn execute(&self, _calls: &[Call]) -> Result<InvokeResult> {
            unreachable!("not exercised")
        }

        async fn declare(&self, _declaration: &Declaration) -> Result<DeclareResult> {
            unreachable!("not exercised")
        }

        async fn deploy_account(&self, deployment: &AccountDeployment) -> Result<DeployResult> {
            Ok(DeployResult {
                transaction_hash: "0x1".into(),
                contract_address: deployment
                    .contract_address
                    .clone()
                    .unwrap_or_else(|| "0x2".into()),
            })
        }

        async fn sign_typed_data(&self, _data: &TypedData) -> Result<Vec<String>> {
            unreachable!("not exercised")
        }
    }

    fn account() -> DeployOnlyAccount {
        DeployOnlyAccount {
            address: Address::parse("0x1").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_missing_account_fails_synchronously() {
        let err = deploy_account(None, &DeployAccountVariables::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StarklineError::MissingParameter("account")));
    }

    #[tokio::test]
    async fn test_missing_class_hash_fails_synchronously() {
        let account = account();
        let err = deploy_account(Some(&account), &DeployAccountVariables::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StarklineError::MissingParameter("classHash")));
    }

    #[tokio::test]
    async fn test_deploys_with_class_hash() {
        let account = account();
        let variables = DeployAccountVariables {
            class_hash: Some("0xc1a55".into()),
            ..Default::default()
        };
        let result = deploy_account(Some(&account), &variables).await.unwrap();
        assert_eq!(result.transaction_hash, "0x1");
    }

    #[test]
    fn test_key_shape() {
        let key = deploy_account_mutation_key(&DeployAccountVariables {
            class_hash: Some("0xc1a55".into()),
            ..Default::default()
        });
        assert_eq!(key[0]["entity"], "deployAccount");
        assert_eq!(key[0]["classHash"], "0xc1a55");
        assert!(key[0]["contractAddress"].is_null());
    }
}
