//! Connection manager configuration.

use std::sync::Arc;

use starkline_core::chains::{Chain, ChainId};
use starkline_core::traits::{ChainProviderFactory, PaymasterFactory};
use starkline_query::QueryCache;

/// Configuration for a [`ConnectionManager`](crate::ConnectionManager).
///
/// The chain list is host-supplied and must be non-empty with unique ids.
/// Factories must yield a provider/paymaster for every configured chain;
/// any miss is a fatal construction error.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Chains supported by the host application, in preference order.
    pub chains: Vec<Chain>,
    /// Chain to start on while disconnected. Falls back to the list head
    /// when it matches no configured chain.
    pub default_chain_id: Option<ChainId>,
    /// Derives the RPC provider for a chain.
    pub provider: ChainProviderFactory,
    /// Derives the paymaster for a chain.
    pub paymaster: PaymasterFactory,
    /// Query cache shared with the query layer. Built at the composition
    /// root and injected; never a global.
    pub cache: Arc<QueryCache>,
}

impl ConnectionConfig {
    /// Creates a configuration with no default chain override and a fresh
    /// query cache.
    pub fn new(
        chains: Vec<Chain>,
        provider: ChainProviderFactory,
        paymaster: PaymasterFactory,
    ) -> Self {
        Self {
            chains,
            default_chain_id: None,
            provider,
            paymaster,
            cache: Arc::new(QueryCache::new()),
        }
    }

    /// Sets the default chain id.
    pub fn with_default_chain_id(mut self, chain_id: ChainId) -> Self {
        self.default_chain_id = Some(chain_id);
        self
    }

    /// Replaces the query cache.
    pub fn with_cache(mut self, cache: Arc<QueryCache>) -> Self {
        self.cache = cache;
        self
    }
}
