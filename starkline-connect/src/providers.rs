//! Built-in provider and paymaster implementations.
//!
//! Suitable for composition roots that do not need a live RPC connection,
//! and for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use starkline_core::chains::ChainId;
use starkline_core::error::Result;
use starkline_core::traits::{
    ChainProvider, ChainProviderFactory, PaymasterFactory, PaymasterProvider,
};
use starkline_core::types::Address;

/// A provider answering from fixed, locally held data.
pub struct StaticProvider {
    chain_id: ChainId,
    nonces: RwLock<HashMap<Address, String>>,
}

impl StaticProvider {
    /// Creates a provider for the given chain id.
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            nonces: RwLock::new(HashMap::new()),
        }
    }

    /// Sets the nonce reported for an address.
    pub fn set_nonce(&self, address: Address, nonce: impl Into<String>) {
        self.nonces.write().insert(address, nonce.into());
    }
}

#[async_trait]
impl ChainProvider for StaticProvider {
    async fn chain_id(&self) -> Result<ChainId> {
        Ok(self.chain_id)
    }

    async fn nonce_for_address(
        &self,
        address: &Address,
        _block_identifier: Option<&str>,
    ) -> Result<String> {
        Ok(self
            .nonces
            .read()
            .get(address)
            .cloned()
            .unwrap_or_else(|| "0x0".into()))
    }
}

/// A paymaster with a fixed availability answer.
pub struct StaticPaymaster {
    available: bool,
}

impl StaticPaymaster {
    /// Creates a paymaster reporting the given availability.
    pub fn new(available: bool) -> Self {
        Self { available }
    }
}

#[async_trait]
impl PaymasterProvider for StaticPaymaster {
    async fn is_available(&self) -> Result<bool> {
        Ok(self.available)
    }
}

/// A factory deriving a [`StaticProvider`] for every chain.
pub fn static_provider_factory() -> ChainProviderFactory {
    Arc::new(|chain| Some(Arc::new(StaticProvider::new(chain.id)) as Arc<dyn ChainProvider>))
}

/// A factory deriving an always-available [`StaticPaymaster`] for every
/// chain.
pub fn static_paymaster_factory() -> PaymasterFactory {
    Arc::new(|_chain| Some(Arc::new(StaticPaymaster::new(true)) as Arc<dyn PaymasterProvider>))
}

#[cfg(test)]
mod tests {
    use starkline_core::chains::{mainnet, MAINNET_ID};

    use super::*;

    #[tokio::test]
    async fn test_static_provider_tracks_chain_and_nonces() {
        let provider = StaticProvider::new(MAINNET_ID);
        let address = Address::parse("0x1").unwrap();

        assert_eq!(provider.chain_id().await.unwrap(), MAINNET_ID);
        assert_eq!(provider.nonce_for_address(&address, None).await.unwrap(), "0x0");

        provider.set_nonce(address.clone(), "0x5");
        assert_eq!(provider.nonce_for_address(&address, None).await.unwrap(), "0x5");
    }

    #[tokio::test]
    async fn test_factories_cover_any_chain() {
        let chain = mainnet();
        assert!(static_provider_factory()(&chain).is_some());
        assert!(static_paymaster_factory()(&chain).is_some());
    }
}
