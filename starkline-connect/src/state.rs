//! Observable connection state.

use std::fmt;
use std::sync::Arc;

use starkline_core::chains::Chain;
use starkline_core::traits::{ChainProvider, PaymasterProvider, Wallet};
use starkline_core::types::Address;

use crate::account::WalletAccount;

/// Connection lifecycle phase, as seen by read-only consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountStatus {
    /// A session is established and an account is active.
    Connected,
    /// A connect call is in flight with no prior session.
    Connecting,
    /// A connect call is in flight while a wallet reference is still held.
    Reconnecting,
    /// No session.
    Disconnected,
}

/// The state quadruple owned by the reconciler, published through a watch
/// channel.
///
/// `chain` is always one of the configured chains; `provider` and `paymaster`
/// are always derived from `chain` through the configured factories and are
/// never stale. `address`, `account`, and `wallet` are present only while a
/// session is established.
#[derive(Clone)]
pub struct ConnectionState {
    /// Currently tracked chain.
    pub chain: Chain,
    /// Provider derived from `chain`.
    pub provider: Arc<dyn ChainProvider>,
    /// Paymaster derived from `chain`.
    pub paymaster: Arc<dyn PaymasterProvider>,
    /// Address of the active account, when connected.
    pub address: Option<Address>,
    /// Account bound to `address`/`provider`/`wallet`, when connected.
    pub account: Option<Arc<WalletAccount>>,
    /// The wallet that produced the current session, when connected.
    pub wallet: Option<Arc<dyn Wallet>>,
    /// Whether a connect call is in flight.
    pub connecting: bool,
}

impl ConnectionState {
    /// Whether a session is established.
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// The lifecycle phase this state corresponds to.
    pub fn status(&self) -> AccountStatus {
        if self.connecting {
            if self.wallet.is_some() {
                AccountStatus::Reconnecting
            } else {
                AccountStatus::Connecting
            }
        } else if self.is_connected() {
            AccountStatus::Connected
        } else {
            AccountStatus::Disconnected
        }
    }
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionState")
            .field("chain", &self.chain.name)
            .field("address", &self.address)
            .field("connecting", &self.connecting)
            .field("wallet", &self.wallet.as_ref().map(|w| w.id().to_string()))
            .finish()
    }
}
