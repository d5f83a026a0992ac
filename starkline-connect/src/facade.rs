//! Read-only account snapshot for UI-facing consumers.

use starkline_core::chains::ChainId;
use starkline_core::types::Address;

use crate::state::{AccountStatus, ConnectionState};

/// A flattened read surface over [`ConnectionState`], the shape a hook layer
/// exposes to its consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// Address of the active account, when connected.
    pub address: Option<Address>,
    /// Id of the currently tracked chain.
    pub chain_id: ChainId,
    /// Id of the wallet the session came from, when connected.
    pub connector_id: Option<String>,
    /// Connection lifecycle phase.
    pub status: AccountStatus,
}

impl From<&ConnectionState> for AccountSnapshot {
    fn from(state: &ConnectionState) -> Self {
        Self {
            address: state.address.clone(),
            chain_id: state.chain.id,
            connector_id: state.wallet.as_ref().map(|w| w.id().to_string()),
            status: state.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use starkline_core::chains::{devnet, mainnet, DEVNET_ID};
    use starkline_core::traits::Account;
    use starkline_mock::{MockAccount, MockWallet, MockWalletAccounts, MockWalletOptions};

    use crate::config::ConnectionConfig;
    use crate::manager::ConnectionManager;
    use crate::providers::{static_paymaster_factory, static_provider_factory};

    use super::*;

    #[tokio::test]
    async fn test_snapshot_follows_connection_lifecycle() {
        let manager = ConnectionManager::new(ConnectionConfig::new(
            vec![devnet(), mainnet()],
            static_provider_factory(),
            static_paymaster_factory(),
        ))
        .unwrap();

        let snapshot = AccountSnapshot::from(&manager.state());
        assert_eq!(snapshot.status, AccountStatus::Disconnected);
        assert_eq!(snapshot.chain_id, DEVNET_ID);
        assert!(snapshot.address.is_none());
        assert!(snapshot.connector_id.is_none());

        let account = Arc::new(MockAccount::new(Address::parse("0x51").unwrap()));
        let wallet = Arc::new(
            MockWallet::new(
                MockWalletAccounts {
                    sepolia: vec![account.clone() as Arc<dyn Account>],
                    mainnet: vec![account as Arc<dyn Account>],
                },
                MockWalletOptions::default(),
            )
            .unwrap(),
        );
        manager.connect(wallet).await.unwrap();

        let snapshot = AccountSnapshot::from(&manager.state());
        assert_eq!(snapshot.status, AccountStatus::Connected);
        assert_eq!(snapshot.address, Some(Address::parse("0x51").unwrap()));
        assert_eq!(snapshot.connector_id.as_deref(), Some("mock"));
    }
}
