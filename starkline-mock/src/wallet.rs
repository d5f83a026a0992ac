//! The mock wallet protocol simulator.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use starkline_core::chains::{
    chain_to_wallet_standard, devnet, mainnet, sepolia, Chain, ChainId, DEVNET_ID, MAINNET_ID,
    SEPOLIA_ID,
};
use starkline_core::error::{Result, StarklineError};
use starkline_core::requests::{WalletRequest, WalletResponse};
use starkline_core::traits::{Account, ChangeListener, Unsubscribe, Wallet};
use starkline_core::types::{
    Address, Call, ChangeEvent, Declaration, Permission, RequestCall, WalletAccountInfo,
};

use crate::emitter::ChangeEmitter;

/// Behavior switches for the mock wallet.
#[derive(Clone, Debug)]
pub struct MockWalletOptions {
    /// Stable wallet identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether connect attempts find the wallet at all.
    pub available: bool,
    /// Fail the next connect with a user rejection.
    pub fail_connect: bool,
    /// Fail every request with a user rejection.
    pub reject_request: bool,
    /// Fail declare requests with a user rejection.
    pub reject_declare: bool,
}

impl Default for MockWalletOptions {
    fn default() -> Self {
        Self {
            id: "mock".into(),
            name: "Mock Wallet".into(),
            available: true,
            fail_connect: false,
            reject_request: false,
            reject_declare: false,
        }
    }
}

/// Account pools backing the mock wallet, one per network class.
pub struct MockWalletAccounts {
    /// Accounts used on sepolia (and any non-mainnet chain).
    pub sepolia: Vec<Arc<dyn Account>>,
    /// Accounts used on mainnet.
    pub mainnet: Vec<Arc<dyn Account>>,
}

/// An in-memory, fully scriptable wallet implementing the capability surface.
///
/// The mock tracks a current chain id (devnet by default) and an account
/// index into the pool matching that chain. Test-control operations
/// ([`MockWallet::switch_chain`], [`MockWallet::switch_account`],
/// [`MockWallet::update_options`]) simulate the wallet acting on its own.
pub struct MockWallet {
    /// Unique per-instance identifier, useful when tests hold several mocks.
    pub instance_id: String,
    id: String,
    name: String,
    options: RwLock<MockWalletOptions>,
    accounts: MockWalletAccounts,
    account_index: AtomicUsize,
    connected: AtomicBool,
    chain_id: RwLock<ChainId>,
    emitter: ChangeEmitter,
}

impl MockWallet {
    /// Creates a mock wallet.
    ///
    /// Both account pools must be non-empty; an empty pool is a fatal
    /// configuration error.
    pub fn new(accounts: MockWalletAccounts, options: MockWalletOptions) -> Result<Self> {
        if accounts.sepolia.is_empty() || accounts.mainnet.is_empty() {
            return Err(StarklineError::Config(
                "mock wallet accounts must not be empty".into(),
            ));
        }

        Ok(Self {
            instance_id: Uuid::new_v4().to_string(),
            id: options.id.clone(),
            name: options.name.clone(),
            options: RwLock::new(options),
            accounts,
            account_index: AtomicUsize::new(0),
            connected: AtomicBool::new(false),
            chain_id: RwLock::new(DEVNET_ID),
            emitter: ChangeEmitter::new(),
        })
    }

    /// Replaces parts of the options at runtime.
    pub fn update_options(&self, update: impl FnOnce(&mut MockWalletOptions)) {
        update(&mut self.options.write());
    }

    /// Simulates the wallet autonomously switching chains.
    ///
    /// Resets the account index to the pool head and notifies listeners with
    /// both the new chain identifiers and the new account list.
    pub fn switch_chain(&self, chain_id: ChainId) {
        *self.chain_id.write() = chain_id;
        self.account_index.store(0, Ordering::SeqCst);
        debug!(chain_id = format!("{chain_id:#x}"), "mock wallet switched chain");
        self.emitter.emit(
            "change",
            &ChangeEvent {
                chains: Some(self.chains()),
                accounts: Some(self.accounts()),
            },
        );
    }

    /// Simulates the wallet switching the active account.
    ///
    /// The index is stored as-is; an out-of-range value surfaces later as
    /// `NoAccountAvailable` when the account is resolved.
    pub fn switch_account(&self, index: usize) {
        self.account_index.store(index, Ordering::SeqCst);
        self.emitter.emit(
            "change",
            &ChangeEvent {
                chains: None,
                accounts: Some(self.accounts()),
            },
        );
    }

    /// The chain the stored chain id resolves to.
    ///
    /// A fixed three-way mapping: mainnet, sepolia, anything else is devnet.
    pub fn current_chain(&self) -> Chain {
        match *self.chain_id.read() {
            MAINNET_ID => mainnet(),
            SEPOLIA_ID => sepolia(),
            _ => devnet(),
        }
    }

    fn active_account(&self) -> Result<Arc<dyn Account>> {
        let pool = if *self.chain_id.read() == MAINNET_ID {
            &self.accounts.mainnet
        } else {
            &self.accounts.sepolia
        };
        pool.get(self.account_index.load(Ordering::SeqCst))
            .cloned()
            .ok_or(StarklineError::NoAccountAvailable)
    }

    fn transform_calls(calls: &[RequestCall]) -> Result<Vec<Call>> {
        calls
            .iter()
            .map(|call| {
                Ok(Call {
                    contract_address: Address::parse(&call.contract_address)?,
                    entrypoint: call.entry_point.clone(),
                    calldata: call.calldata.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl Wallet for MockWallet {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn chains(&self) -> Vec<String> {
        vec![chain_to_wallet_standard(&self.current_chain())]
    }

    fn accounts(&self) -> Vec<WalletAccountInfo> {
        if !self.connected.load(Ordering::SeqCst) {
            return vec![];
        }
        match self.active_account() {
            Ok(account) => vec![WalletAccountInfo {
                address: account.address().clone(),
                chains: self.chains(),
            }],
            Err(_) => vec![],
        }
    }

    async fn connect(&self, silent: bool) -> Result<Vec<WalletAccountInfo>> {
        {
            let options = self.options.read();
            if options.fail_connect {
                return Err(StarklineError::UserRejected);
            }
            if !options.available {
                return Err(StarklineError::WalletUnavailable);
            }
        }

        let response = self
            .request(WalletRequest::RequestAccounts {
                silent_mode: silent,
            })
            .await?;
        let addresses = match response {
            WalletResponse::Accounts(addresses) => addresses,
            _ => return Err(StarklineError::UnexpectedResponse("wallet_requestAccounts")),
        };

        if addresses.is_empty() {
            return Ok(vec![]);
        }

        self.connected.store(true, Ordering::SeqCst);
        let accounts = self.accounts();
        self.emitter.emit(
            "change",
            &ChangeEvent {
                chains: None,
                accounts: Some(accounts.clone()),
            },
        );
        Ok(accounts)
    }

    async fn disconnect(&self) -> Result<()> {
        self.connected.store(false, Ordering::SeqCst);
        self.emitter.emit(
            "change",
            &ChangeEvent {
                chains: None,
                accounts: Some(vec![]),
            },
        );
        Ok(())
    }

    fn on_change(&self, listener: ChangeListener) -> Unsubscribe {
        self.emitter.on("change", listener)
    }

    async fn request(&self, request: WalletRequest) -> Result<WalletResponse> {
        if self.options.read().reject_request {
            return Err(StarklineError::UserRejected);
        }

        match request {
            WalletRequest::RequestChainId => Ok(WalletResponse::ChainId(format!(
                "0x{:x}",
                *self.chain_id.read()
            ))),

            WalletRequest::GetPermissions => {
                let permissions = if self.connected.load(Ordering::SeqCst) {
                    vec![Permission::Accounts]
                } else {
                    vec![]
                };
                Ok(WalletResponse::Permissions(permissions))
            }

            WalletRequest::RequestAccounts { .. } => {
                let account = self.active_account()?;
                Ok(WalletResponse::Accounts(vec![account.address().clone()]))
            }

            WalletRequest::AddStarknetChain(_) | WalletRequest::WatchAsset(_) => {
                Ok(WalletResponse::Acknowledged(true))
            }

            WalletRequest::SwitchStarknetChain { chain_id } => {
                self.switch_chain(chain_id);
                Ok(WalletResponse::Acknowledged(true))
            }

            WalletRequest::AddDeclareTransaction(params) => {
                if self.options.read().reject_declare {
                    return Err(StarklineError::UserRejected);
                }
                let contract = params.contract_class.parse_abi()?;
                let declaration = Declaration {
                    compiled_class_hash: params.compiled_class_hash,
                    class_hash: params.class_hash,
                    contract,
                };
                let result = self.active_account()?.declare(&declaration).await?;
                Ok(WalletResponse::Declare(result))
            }

            WalletRequest::AddInvokeTransaction { calls } => {
                let calls = Self::transform_calls(&calls)?;
                let result = self.active_account()?.execute(&calls).await?;
                Ok(WalletResponse::Invoke(result))
            }

            WalletRequest::SignTypedData(data) => {
                let signature = self.active_account()?.sign_typed_data(&data).await?;
                Ok(WalletResponse::Signature(signature))
            }
        }
    }
}
