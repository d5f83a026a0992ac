//! Typed wallet protocol calls.
//!
//! Each helper performs a single request/response round trip and unwraps the
//! matching response variant, failing with `UnexpectedResponse` when the
//! wallet answers with a different shape. No batching, no cancellation.

use starkline_core::chains::ChainId;
use starkline_core::error::{Result, StarklineError};
use starkline_core::requests::{WalletRequest, WalletResponse};
use starkline_core::traits::Wallet;
use starkline_core::types::{
    AddChainParameters, Address, DeclareParameters, DeclareResult, InvokeResult, Permission,
    RequestCall, TypedData, WatchAssetParameters,
};

/// Queries the wallet's current chain id.
pub async fn request_chain_id(wallet: &dyn Wallet) -> Result<ChainId> {
    match wallet.request(WalletRequest::RequestChainId).await? {
        WalletResponse::ChainId(hex) => {
            let digits = hex.strip_prefix("0x").unwrap_or(&hex);
            ChainId::from_str_radix(digits, 16)
                .map_err(|_| StarklineError::InvalidChainIdentifier(hex))
        }
        _ => Err(StarklineError::UnexpectedResponse("wallet_requestChainId")),
    }
}

/// Queries granted permissions.
pub async fn get_permissions(wallet: &dyn Wallet) -> Result<Vec<Permission>> {
    match wallet.request(WalletRequest::GetPermissions).await? {
        WalletResponse::Permissions(permissions) => Ok(permissions),
        _ => Err(StarklineError::UnexpectedResponse("wallet_getPermissions")),
    }
}

/// Requests the active account list.
pub async fn request_accounts(wallet: &dyn Wallet, silent_mode: bool) -> Result<Vec<Address>> {
    match wallet
        .request(WalletRequest::RequestAccounts { silent_mode })
        .await?
    {
        WalletResponse::Accounts(accounts) => Ok(accounts),
        _ => Err(StarklineError::UnexpectedResponse("wallet_requestAccounts")),
    }
}

/// Asks the wallet to add a chain.
pub async fn add_chain(wallet: &dyn Wallet, params: AddChainParameters) -> Result<bool> {
    match wallet.request(WalletRequest::AddStarknetChain(params)).await? {
        WalletResponse::Acknowledged(accepted) => Ok(accepted),
        _ => Err(StarklineError::UnexpectedResponse("wallet_addStarknetChain")),
    }
}

/// Asks the wallet to track an asset.
pub async fn watch_asset(wallet: &dyn Wallet, params: WatchAssetParameters) -> Result<bool> {
    match wallet.request(WalletRequest::WatchAsset(params)).await? {
        WalletResponse::Acknowledged(accepted) => Ok(accepted),
        _ => Err(StarklineError::UnexpectedResponse("wallet_watchAsset")),
    }
}

/// Asks the wallet to switch its active chain, triggering the wallet's own
/// chain-switch side effects.
pub async fn switch_chain(wallet: &dyn Wallet, chain_id: ChainId) -> Result<bool> {
    match wallet
        .request(WalletRequest::SwitchStarknetChain { chain_id })
        .await?
    {
        WalletResponse::Acknowledged(accepted) => Ok(accepted),
        _ => Err(StarklineError::UnexpectedResponse(
            "wallet_switchStarknetChain",
        )),
    }
}

/// Submits a declare transaction.
pub async fn add_declare_transaction(
    wallet: &dyn Wallet,
    params: DeclareParameters,
) -> Result<DeclareResult> {
    match wallet
        .request(WalletRequest::AddDeclareTransaction(params))
        .await?
    {
        WalletResponse::Declare(result) => Ok(result),
        _ => Err(StarklineError::UnexpectedResponse(
            "wallet_addDeclareTransaction",
        )),
    }
}

/// Submits an invoke transaction.
pub async fn add_invoke_transaction(
    wallet: &dyn Wallet,
    calls: Vec<RequestCall>,
) -> Result<InvokeResult> {
    match wallet
        .request(WalletRequest::AddInvokeTransaction { calls })
        .await?
    {
        WalletResponse::Invoke(result) => Ok(result),
        _ => Err(StarklineError::UnexpectedResponse(
            "wallet_addInvokeTransaction",
        )),
    }
}

/// Signs typed data with the active account.
pub async fn sign_typed_data(wallet: &dyn Wallet, data: TypedData) -> Result<Vec<String>> {
    match wallet.request(WalletRequest::SignTypedData(data)).await? {
        WalletResponse::Signature(signature) => Ok(signature),
        _ => Err(StarklineError::UnexpectedResponse("wallet_signTypedData")),
    }
}

/// Sends a request carried as a raw tag and JSON parameters.
///
/// Unknown tags fail with `UnsupportedRequest` before reaching the wallet.
pub async fn raw_request(
    wallet: &dyn Wallet,
    tag: &str,
    params: Option<serde_json::Value>,
) -> Result<WalletResponse> {
    let request = WalletRequest::from_raw(tag, params)?;
    wallet.request(request).await
}
