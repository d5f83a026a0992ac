//! Generic wallet-request mutation.

use serde_json::{json, Value};

use starkline_core::error::{Result, StarklineError};
use starkline_core::requests::{RequestMethod, WalletRequest, WalletResponse};
use starkline_core::traits::Wallet;

/// Mutation key for a raw wallet request, keyed by its request-type tag.
pub fn wallet_request_mutation_key(method: RequestMethod) -> Value {
    json!([{ "entity": "walletRequest", "method": method.as_str() }])
}

/// Sends a typed request to the wallet.
///
/// A missing wallet fails with a typed error before any protocol call.
pub async fn wallet_request(
    wallet: Option<&dyn Wallet>,
    request: WalletRequest,
) -> Result<WalletResponse> {
    let wallet = wallet.ok_or(StarklineError::MissingParameter("wallet"))?;
    wallet.request(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use starkline_core::chains::MAINNET_ID;
    use starkline_core::traits::Account;
    use starkline_core::types::Address;
    use starkline_mock::{MockAccount, MockWallet, MockWalletAccounts, MockWalletOptions};

    use super::*;

    fn wallet() -> MockWallet {
        let account: Arc<dyn Account> =
            Arc::new(MockAccount::new(Address::parse("0x51").unwrap()));
        MockWallet::new(
            MockWalletAccounts {
                sepolia: vec![account.clone()],
                mainnet: vec![account],
            },
            MockWalletOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_key_carries_method_tag() {
        let key = wallet_request_mutation_key(RequestMethod::RequestChainId);
        assert_eq!(key[0]["entity"], "walletRequest");
        assert_eq!(key[0]["method"], "wallet_requestChainId");
    }

    #[tokio::test]
    async fn test_missing_wallet_fails_synchronously() {
        let err = wallet_request(None, WalletRequest::RequestChainId)
            .await
            .unwrap_err();
        assert!(matches!(err, StarklineError::MissingParameter("wallet")));
    }

    #[tokio::test]
    async fn test_delegates_to_wallet() {
        let wallet = wallet();
        wallet.switch_chain(MAINNET_ID);
        let response = wallet_request(Some(&wallet), WalletRequest::RequestChainId)
            .await
            .unwrap();
        assert_eq!(response, WalletResponse::ChainId("0x534e5f4d41494e".into()));
    }
}
