//! Connection state reconciler.
//!
//! The manager owns the chain/provider/paymaster/account quadruple and
//! updates it reactively as the wallet connects, disconnects, or emits
//! change events. State changes are event-sourced: `connect` and
//! `disconnect` only delegate to the wallet; the `change` events the wallet
//! emits drive every state transition.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use starkline_core::chains::{parse_wallet_standard_chain, Chain, ChainId};
use starkline_core::error::{Result, StarklineError};
use starkline_core::traits::{
    ChainProvider, ChainProviderFactory, PaymasterFactory, PaymasterProvider, Unsubscribe, Wallet,
};
use starkline_core::types::{ChangeEvent, WalletAccountInfo};
use starkline_query::QueryCache;

use crate::account::WalletAccount;
use crate::config::ConnectionConfig;
use crate::state::ConnectionState;

struct ActiveSession {
    wallet: Arc<dyn Wallet>,
    unsubscribe: Option<Unsubscribe>,
}

struct ManagerInner {
    chains: Vec<Chain>,
    provider_factory: ChainProviderFactory,
    paymaster_factory: PaymasterFactory,
    default_chain: Chain,
    default_provider: Arc<dyn ChainProvider>,
    default_paymaster: Arc<dyn PaymasterProvider>,
    cache: Arc<QueryCache>,
    tx: watch::Sender<ConnectionState>,
    active: Mutex<Option<ActiveSession>>,
}

/// The reconciler owning connection state for one provider scope.
///
/// Holds at most one active wallet at a time. State is published through a
/// watch channel; each change event is applied atomically before the next is
/// processed, so readers never observe a partially updated quadruple.
pub struct ConnectionManager {
    inner: Arc<ManagerInner>,
}

impl ConnectionManager {
    /// Validates the configuration and creates a manager in the disconnected
    /// state.
    ///
    /// Fails when the chain list is empty, when two chains share an id, or
    /// when a factory yields nothing for a configured chain. A
    /// `default_chain_id` matching no configured chain falls back to the
    /// list head instead of failing.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        if config.chains.is_empty() {
            return Err(StarklineError::Config(
                "at least one chain must be configured".into(),
            ));
        }

        let mut seen = HashSet::new();
        for chain in &config.chains {
            if !seen.insert(chain.id) {
                return Err(StarklineError::DuplicatedChainId(chain.id));
            }
        }

        for chain in &config.chains {
            if (config.provider)(chain).is_none() {
                return Err(StarklineError::NoProviderForChain(chain.name.clone()));
            }
            if (config.paymaster)(chain).is_none() {
                return Err(StarklineError::NoPaymasterForChain(chain.name.clone()));
            }
        }

        let default_chain = match config.default_chain_id {
            Some(id) => match config.chains.iter().find(|c| c.id == id) {
                Some(chain) => chain.clone(),
                None => {
                    warn!(
                        chain_id = format!("{id:#x}"),
                        "default chain id matches no configured chain, using list head"
                    );
                    config.chains[0].clone()
                }
            },
            None => config.chains[0].clone(),
        };

        // Factories were just validated for every configured chain.
        let default_provider = (config.provider)(&default_chain)
            .ok_or_else(|| StarklineError::NoProviderForChain(default_chain.name.clone()))?;
        let default_paymaster = (config.paymaster)(&default_chain)
            .ok_or_else(|| StarklineError::NoPaymasterForChain(default_chain.name.clone()))?;

        let (tx, _rx) = watch::channel(ConnectionState {
            chain: default_chain.clone(),
            provider: default_provider.clone(),
            paymaster: default_paymaster.clone(),
            address: None,
            account: None,
            wallet: None,
            connecting: false,
        });

        info!(chain = %default_chain.name, "connection manager initialized");
        Ok(Self {
            inner: Arc::new(ManagerInner {
                chains: config.chains,
                provider_factory: config.provider,
                paymaster_factory: config.paymaster,
                default_chain,
                default_provider,
                default_paymaster,
                cache: config.cache,
                tx,
                active: Mutex::new(None),
            }),
        })
    }

    /// The configured chain list.
    pub fn chains(&self) -> &[Chain] {
        &self.inner.chains
    }

    /// The injected query cache.
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.inner.cache
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ConnectionState {
        self.inner.tx.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.inner.tx.subscribe()
    }

    /// Connects a wallet.
    ///
    /// Registers the change listener before delegating to the wallet's
    /// connect capability, so the connect-time emission is observed. The
    /// call itself never mutates the quadruple: a connect that succeeds at
    /// the protocol level but yields no accounts leaves state disconnected.
    pub async fn connect(&self, wallet: Arc<dyn Wallet>) -> Result<Vec<WalletAccountInfo>> {
        debug!(wallet = wallet.id(), "connecting wallet");
        self.inner.tx.send_modify(|state| state.connecting = true);

        let inner = Arc::downgrade(&self.inner);
        let wallet_ref = Arc::downgrade(&wallet);
        let unsubscribe = wallet.on_change(Arc::new(move |event| {
            if let (Some(inner), Some(wallet)) = (inner.upgrade(), wallet_ref.upgrade()) {
                inner.apply_change(&wallet, event);
            }
        }));

        {
            let mut active = self.inner.active.lock();
            if let Some(previous) = active.take() {
                if let Some(unsubscribe) = previous.unsubscribe {
                    unsubscribe();
                }
            }
            *active = Some(ActiveSession {
                wallet: wallet.clone(),
                unsubscribe: Some(unsubscribe),
            });
        }

        let result = wallet.connect(false).await;
        self.inner.tx.send_modify(|state| state.connecting = false);

        if result.is_err() {
            let mut active = self.inner.active.lock();
            if let Some(session) = active.take() {
                if let Some(unsubscribe) = session.unsubscribe {
                    unsubscribe();
                }
            }
        }
        result
    }

    /// Disconnects the active wallet.
    ///
    /// Delegates to the wallet's disconnect capability; the reset itself is
    /// driven by the empty-accounts change event the wallet emits. Calling
    /// this with no active wallet is a no-op.
    pub async fn disconnect(&self) -> Result<()> {
        let session = self.inner.active.lock().take();
        let Some(session) = session else {
            debug!("disconnect with no active wallet");
            return Ok(());
        };

        let result = session.wallet.disconnect().await;
        // Unsubscribe after the call so the disconnect emission is observed.
        if let Some(unsubscribe) = session.unsubscribe {
            unsubscribe();
        }
        result
    }
}

impl ManagerInner {
    /// Applies one change event atomically.
    fn apply_change(&self, wallet: &Arc<dyn Wallet>, event: &ChangeEvent) {
        self.tx.send_modify(|state| {
            if event.is_disconnect() {
                debug!("wallet reported no accounts, resetting to defaults");
                state.address = None;
                state.account = None;
                state.wallet = None;
                state.chain = self.default_chain.clone();
                state.provider = self.default_provider.clone();
                state.paymaster = self.default_paymaster.clone();
                self.cache.clear();
                return;
            }

            let Some(address) = event.first_address().cloned() else {
                return;
            };

            if let Some(identifier) = event.chains.as_ref().and_then(|chains| chains.first()) {
                match parse_wallet_standard_chain(identifier) {
                    Ok(chain_id) if chain_id != state.chain.id => {
                        self.rederive_chain(state, chain_id);
                    }
                    Ok(_) => {}
                    Err(err) => {
                        // Malformed identifiers are not fatal; the event is
                        // processed with whatever fields are valid.
                        error!(identifier = %identifier, %err, "failed to parse chain identifier");
                    }
                }
            }

            state.address = Some(address.clone());
            state.wallet = Some(wallet.clone());
            state.account = Some(Arc::new(WalletAccount::new(
                address,
                state.provider.clone(),
                wallet.clone(),
                state.paymaster.clone(),
            )));
        });
    }

    /// Re-derives chain, provider, and paymaster for a chain id reported by
    /// the wallet. Ids outside the configured list are ignored and the
    /// previous chain is kept.
    fn rederive_chain(&self, state: &mut ConnectionState, chain_id: ChainId) {
        let Some(target) = self.chains.iter().find(|c| c.id == chain_id) else {
            debug!(
                chain_id = format!("{chain_id:#x}"),
                "wallet switched to an unconfigured chain, keeping previous"
            );
            return;
        };

        let provider = (self.provider_factory)(target);
        let paymaster = (self.paymaster_factory)(target);
        let (Some(provider), Some(paymaster)) = (provider, paymaster) else {
            // The factories answered for this chain at construction time.
            error!(chain = %target.name, "factory stopped producing for a configured chain");
            return;
        };

        debug!(chain = %target.name, "switched tracked chain");
        state.chain = target.clone();
        state.provider = provider;
        state.paymaster = paymaster;
    }
}
