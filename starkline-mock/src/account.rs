//! Scriptable SDK account used as the mock wallet's backing account.

use async_trait::async_trait;
use parking_lot::Mutex;

use starkline_core::error::Result;
use starkline_core::traits::Account;
use starkline_core::types::{
    AccountDeployment, Address, Call, Declaration, DeclareResult, DeployResult, InvokeResult,
    TypedData,
};

/// An in-memory account that records every operation for assertions and
/// returns deterministic transaction hashes.
pub struct MockAccount {
    address: Address,
    executed: Mutex<Vec<Vec<Call>>>,
    declared: Mutex<Vec<Declaration>>,
    deployed: Mutex<Vec<AccountDeployment>>,
    signed: Mutex<Vec<TypedData>>,
}

impl MockAccount {
    /// Creates an account with the given address.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            executed: Mutex::new(Vec::new()),
            declared: Mutex::new(Vec::new()),
            deployed: Mutex::new(Vec::new()),
            signed: Mutex::new(Vec::new()),
        }
    }

    /// Every call batch passed to `execute`, in order.
    pub fn executed_calls(&self) -> Vec<Vec<Call>> {
        self.executed.lock().clone()
    }

    /// Every declaration passed to `declare`, in order.
    pub fn declarations(&self) -> Vec<Declaration> {
        self.declared.lock().clone()
    }

    /// Every typed-data payload passed to `sign_typed_data`, in order.
    pub fn signed_data(&self) -> Vec<TypedData> {
        self.signed.lock().clone()
    }
}

#[async_trait]
impl Account for MockAccount {
    fn address(&self) -> &Address {
        &self.address
    }

    async fn execute(&self, calls: &[Call]) -> Result<InvokeResult> {
        let mut executed = self.executed.lock();
        executed.push(calls.to_vec());
        Ok(InvokeResult {
            transaction_hash: format!("0x{:x}", 0xaa00 + executed.len()),
        })
    }

    async fn declare(&self, declaration: &Declaration) -> Result<DeclareResult> {
        let mut declared = self.declared.lock();
        declared.push(declaration.clone());
        Ok(DeclareResult {
            transaction_hash: format!("0x{:x}", 0xdd00 + declared.len()),
            class_hash: declaration
                .class_hash
                .clone()
                .unwrap_or_else(|| "0x0".into()),
        })
    }

    async fn deploy_account(&self, deployment: &AccountDeployment) -> Result<DeployResult> {
        let mut deployed = self.deployed.lock();
        deployed.push(deployment.clone());
        Ok(DeployResult {
            transaction_hash: format!("0x{:x}", 0xde00 + deployed.len()),
            contract_address: deployment
                .contract_address
                .clone()
                .unwrap_or_else(|| self.address.as_str().to_string()),
        })
    }

    async fn sign_typed_data(&self, data: &TypedData) -> Result<Vec<String>> {
        self.signed.lock().push(data.clone());
        Ok(vec!["0x1".into(), "0x2".into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> MockAccount {
        MockAccount::new(Address::parse("0x100").unwrap())
    }

    #[tokio::test]
    async fn test_execute_records_and_hashes() {
        let account = account();
        let calls = vec![Call {
            contract_address: Address::parse("0x2").unwrap(),
            entrypoint: "transfer".into(),
            calldata: vec!["0x1".into()],
        }];

        let first = account.execute(&calls).await.unwrap();
        let second = account.execute(&calls).await.unwrap();

        assert_ne!(first.transaction_hash, second.transaction_hash);
        assert_eq!(account.executed_calls().len(), 2);
        assert_eq!(account.executed_calls()[0][0].entrypoint, "transfer");
    }

    #[tokio::test]
    async fn test_sign_returns_signature_felts() {
        let account = account();
        let data = TypedData {
            types: serde_json::json!({}),
            primary_type: "Transfer".into(),
            domain: serde_json::json!({}),
            message: serde_json::json!({}),
        };
        let signature = account.sign_typed_data(&data).await.unwrap();
        assert_eq!(signature.len(), 2);
        assert_eq!(account.signed_data().len(), 1);
    }
}
