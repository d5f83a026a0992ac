//! Wallet-backed SDK account.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use starkline_core::error::{Result, StarklineError};
use starkline_core::traits::{Account, ChainProvider, PaymasterProvider, Wallet};
use starkline_core::types::{
    AccountDeployment, Address, Call, ContractClass, Declaration, DeclareParameters, DeclareResult,
    DeployResult, InvokeResult, RequestCall, TypedData,
};

use crate::adapter;

/// An [`Account`] whose operations are fulfilled by the connected wallet
/// through protocol requests.
///
/// Constructed fresh by the reconciler whenever the active address, provider,
/// or paymaster changes; never reused across sessions.
pub struct WalletAccount {
    address: Address,
    provider: Arc<dyn ChainProvider>,
    wallet: Arc<dyn Wallet>,
    paymaster: Arc<dyn PaymasterProvider>,
}

impl WalletAccount {
    /// Binds an account to an address, provider, wallet, and paymaster.
    pub fn new(
        address: Address,
        provider: Arc<dyn ChainProvider>,
        wallet: Arc<dyn Wallet>,
        paymaster: Arc<dyn PaymasterProvider>,
    ) -> Self {
        Self {
            address,
            provider,
            wallet,
            paymaster,
        }
    }

    /// The provider this account reads through.
    pub fn provider(&self) -> &Arc<dyn ChainProvider> {
        &self.provider
    }

    /// The paymaster sponsoring this account's transactions, when used.
    pub fn paymaster(&self) -> &Arc<dyn PaymasterProvider> {
        &self.paymaster
    }

    /// Fetches the account's nonce through the bound provider.
    pub async fn nonce(&self, block_identifier: Option<&str>) -> Result<String> {
        self.provider
            .nonce_for_address(&self.address, block_identifier)
            .await
    }

    fn to_request_calls(calls: &[Call]) -> Vec<RequestCall> {
        calls
            .iter()
            .map(|call| RequestCall {
                contract_address: call.contract_address.as_str().to_string(),
                entry_point: call.entrypoint.clone(),
                calldata: call.calldata.clone(),
            })
            .collect()
    }
}

impl fmt::Debug for WalletAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletAccount")
            .field("address", &self.address)
            .field("wallet", &self.wallet.id())
            .finish()
    }
}

#[async_trait]
impl Account for WalletAccount {
    fn address(&self) -> &Address {
        &self.address
    }

    async fn execute(&self, calls: &[Call]) -> Result<InvokeResult> {
        adapter::add_invoke_transaction(self.wallet.as_ref(), Self::to_request_calls(calls)).await
    }

    async fn declare(&self, declaration: &Declaration) -> Result<DeclareResult> {
        // The wire shape carries the abi serialized as a string.
        let abi = serde_json::to_string(&declaration.contract.abi)?;
        let params = DeclareParameters {
            compiled_class_hash: declaration.compiled_class_hash.clone(),
            class_hash: declaration.class_hash.clone(),
            contract_class: ContractClass {
                sierra_program: declaration.contract.sierra_program.clone(),
                contract_class_version: declaration.contract.contract_class_version.clone(),
                entry_points_by_type: declaration.contract.entry_points_by_type.clone(),
                abi,
            },
        };
        adapter::add_declare_transaction(self.wallet.as_ref(), params).await
    }

    async fn deploy_account(&self, _deployment: &AccountDeployment) -> Result<DeployResult> {
        // The wallet request surface has no deploy-account operation.
        Err(StarklineError::UnsupportedRequest(
            "wallet_deployAccount".into(),
        ))
    }

    async fn sign_typed_data(&self, data: &TypedData) -> Result<Vec<String>> {
        adapter::sign_typed_data(self.wallet.as_ref(), data.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use starkline_core::types::ParsedContractClass;
    use starkline_mock::{MockAccount, MockWallet, MockWalletAccounts, MockWalletOptions};

    use crate::providers::{StaticPaymaster, StaticProvider};

    use super::*;

    fn wallet_account() -> (Arc<MockAccount>, WalletAccount) {
        let backing = Arc::new(MockAccount::new(Address::parse("0x51").unwrap()));
        let wallet = Arc::new(
            MockWallet::new(
                MockWalletAccounts {
                    sepolia: vec![backing.clone() as Arc<dyn Account>],
                    mainnet: vec![backing.clone() as Arc<dyn Account>],
                },
                MockWalletOptions::default(),
            )
            .unwrap(),
        );
        let account = WalletAccount::new(
            backing.address().clone(),
            Arc::new(StaticProvider::new(0x1)),
            wallet,
            Arc::new(StaticPaymaster::new(true)),
        );
        (backing, account)
    }

    #[tokio::test]
    async fn test_execute_goes_through_the_wallet() {
        let (backing, account) = wallet_account();
        let calls = vec![Call {
            contract_address: Address::parse("0x2").unwrap(),
            entrypoint: "transfer".into(),
            calldata: vec!["0x1".into()],
        }];

        account.execute(&calls).await.unwrap();

        let executed = backing.executed_calls();
        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0], calls);
    }

    #[tokio::test]
    async fn test_declare_serializes_abi_for_the_wire() {
        let (backing, account) = wallet_account();
        let declaration = Declaration {
            compiled_class_hash: "0xcafe".into(),
            class_hash: Some("0xc1a55".into()),
            contract: ParsedContractClass {
                sierra_program: vec!["0x1".into()],
                contract_class_version: "0.1.0".into(),
                entry_points_by_type: serde_json::json!({}),
                abi: serde_json::json!([{"type": "function", "name": "transfer"}]),
            },
        };

        let result = account.declare(&declaration).await.unwrap();

        assert_eq!(result.class_hash, "0xc1a55");
        // The mock parses the wire abi back into structured form.
        assert_eq!(backing.declarations()[0].contract.abi, declaration.contract.abi);
    }

    #[tokio::test]
    async fn test_deploy_account_is_unsupported() {
        let (_, account) = wallet_account();
        let err = account
            .deploy_account(&AccountDeployment::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StarklineError::UnsupportedRequest(_)));
    }

    #[tokio::test]
    async fn test_nonce_reads_through_the_provider() {
        let (_, account) = wallet_account();
        assert_eq!(account.nonce(None).await.unwrap(), "0x0");
    }
}
