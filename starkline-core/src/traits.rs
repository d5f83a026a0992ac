//! Capability traits for Starkline.
//!
//! These traits are the seams between the reconciliation core and its
//! collaborators: the wallet extension (or a mock standing in for it), the
//! chain RPC provider, the paymaster, and the SDK account primitives. The
//! core never looks past these interfaces.

use std::sync::Arc;

use async_trait::async_trait;

use crate::chains::{Chain, ChainId};
use crate::error::Result;
use crate::requests::{WalletRequest, WalletResponse};
use crate::types::{
    AccountDeployment, Address, Call, ChangeEvent, Declaration, DeclareResult, DeployResult,
    InvokeResult, TypedData, WalletAccountInfo,
};

// ═══════════════════════════════════════════════════════════════════════════════
// WALLET CAPABILITY SURFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// A listener registered for wallet change events.
pub type ChangeListener = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Removes the listener it was returned for, by identity.
pub type Unsubscribe = Box<dyn FnOnce() + Send>;

/// The wallet capability surface: connect, disconnect, events, request.
///
/// Implementations are the real browser-extension adapter and the mock used
/// in tests. The reconciler holds at most one `Arc<dyn Wallet>` at a time and
/// never owns wallet-side resources.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Stable wallet identifier.
    fn id(&self) -> &str;

    /// Human-readable wallet name.
    fn name(&self) -> &str;

    /// Wallet-standard identifiers of the chains the wallet is active on.
    fn chains(&self) -> Vec<String>;

    /// Accounts currently exposed by the wallet (empty while disconnected).
    fn accounts(&self) -> Vec<WalletAccountInfo>;

    /// Establishes a session and returns the resulting account list.
    ///
    /// An empty list is a valid outcome, not an error; the wallet stays
    /// disconnected in that case.
    async fn connect(&self, silent: bool) -> Result<Vec<WalletAccountInfo>>;

    /// Tears down the session. Idempotent.
    async fn disconnect(&self) -> Result<()>;

    /// Registers a change listener and returns its unsubscriber.
    fn on_change(&self, listener: ChangeListener) -> Unsubscribe;

    /// Performs a single request/response round trip.
    async fn request(&self, request: WalletRequest) -> Result<WalletResponse>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// SDK ACCOUNT SEAM
// ═══════════════════════════════════════════════════════════════════════════════

/// SDK account primitives, treated as an opaque capability provider.
#[async_trait]
pub trait Account: Send + Sync {
    /// Address of this account.
    fn address(&self) -> &Address;

    /// Executes a list of calls as an invoke transaction.
    async fn execute(&self, calls: &[Call]) -> Result<InvokeResult>;

    /// Declares a contract class.
    async fn declare(&self, declaration: &Declaration) -> Result<DeclareResult>;

    /// Deploys an account contract.
    async fn deploy_account(&self, deployment: &AccountDeployment) -> Result<DeployResult>;

    /// Signs typed data and returns the signature felts.
    async fn sign_typed_data(&self, data: &TypedData) -> Result<Vec<String>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER SEAMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Read access to a chain's RPC surface.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Returns the chain id the provider is connected to.
    async fn chain_id(&self) -> Result<ChainId>;

    /// Returns the nonce of an address, optionally at a block tag.
    async fn nonce_for_address(
        &self,
        address: &Address,
        block_identifier: Option<&str>,
    ) -> Result<String>;
}

/// A fee-sponsorship provider for gas-abstracted transactions.
#[async_trait]
pub trait PaymasterProvider: Send + Sync {
    /// Returns true if the paymaster service is reachable.
    async fn is_available(&self) -> Result<bool>;
}

/// Derives a provider for a chain. Must be pure given a chain.
///
/// Returning `None` for a configured chain is a fatal configuration error at
/// reconciler construction time.
pub type ChainProviderFactory = Arc<dyn Fn(&Chain) -> Option<Arc<dyn ChainProvider>> + Send + Sync>;

/// Derives a paymaster for a chain. Same contract as [`ChainProviderFactory`].
pub type PaymasterFactory =
    Arc<dyn Fn(&Chain) -> Option<Arc<dyn PaymasterProvider>> + Send + Sync>;
