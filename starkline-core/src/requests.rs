//! Typed wallet request/response pairs.
//!
//! The wallet `request` capability is keyed by a closed set of request-type
//! tags. [`RequestMethod`] carries the tag itself; [`WalletRequest`] pairs a
//! tag with its typed parameters and [`WalletResponse`] is the matching
//! result shape. Unknown tags fail with [`StarklineError::UnsupportedRequest`]
//! without touching connection state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chains::ChainId;
use crate::error::{Result, StarklineError};
use crate::types::{
    AddChainParameters, Address, DeclareParameters, DeclareResult, InvokeResult, Permission,
    RequestCall, TypedData, WatchAssetParameters,
};

/// The closed set of wallet request-type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `wallet_requestChainId`
    RequestChainId,
    /// `wallet_getPermissions`
    GetPermissions,
    /// `wallet_requestAccounts`
    RequestAccounts,
    /// `wallet_addStarknetChain`
    AddStarknetChain,
    /// `wallet_watchAsset`
    WatchAsset,
    /// `wallet_switchStarknetChain`
    SwitchStarknetChain,
    /// `wallet_addDeclareTransaction`
    AddDeclareTransaction,
    /// `wallet_addInvokeTransaction`
    AddInvokeTransaction,
    /// `wallet_signTypedData`
    SignTypedData,
}

impl RequestMethod {
    /// Returns the wire tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::RequestChainId => "wallet_requestChainId",
            RequestMethod::GetPermissions => "wallet_getPermissions",
            RequestMethod::RequestAccounts => "wallet_requestAccounts",
            RequestMethod::AddStarknetChain => "wallet_addStarknetChain",
            RequestMethod::WatchAsset => "wallet_watchAsset",
            RequestMethod::SwitchStarknetChain => "wallet_switchStarknetChain",
            RequestMethod::AddDeclareTransaction => "wallet_addDeclareTransaction",
            RequestMethod::AddInvokeTransaction => "wallet_addInvokeTransaction",
            RequestMethod::SignTypedData => "wallet_signTypedData",
        }
    }
}

impl FromStr for RequestMethod {
    type Err = StarklineError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "wallet_requestChainId" => Ok(RequestMethod::RequestChainId),
            "wallet_getPermissions" => Ok(RequestMethod::GetPermissions),
            "wallet_requestAccounts" => Ok(RequestMethod::RequestAccounts),
            "wallet_addStarknetChain" => Ok(RequestMethod::AddStarknetChain),
            "wallet_watchAsset" => Ok(RequestMethod::WatchAsset),
            "wallet_switchStarknetChain" => Ok(RequestMethod::SwitchStarknetChain),
            "wallet_addDeclareTransaction" => Ok(RequestMethod::AddDeclareTransaction),
            "wallet_addInvokeTransaction" => Ok(RequestMethod::AddInvokeTransaction),
            "wallet_signTypedData" => Ok(RequestMethod::SignTypedData),
            other => Err(StarklineError::UnsupportedRequest(other.into())),
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wallet request with typed parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletRequest {
    /// Query the wallet's current chain id.
    RequestChainId,
    /// Query granted permissions.
    GetPermissions,
    /// Request the active account list.
    RequestAccounts {
        /// Skip the approval dialog if a session already exists.
        silent_mode: bool,
    },
    /// Ask the wallet to add a chain.
    AddStarknetChain(AddChainParameters),
    /// Ask the wallet to track an asset.
    WatchAsset(WatchAssetParameters),
    /// Ask the wallet to switch its active chain.
    SwitchStarknetChain {
        /// Target chain id.
        chain_id: ChainId,
    },
    /// Submit a declare transaction.
    AddDeclareTransaction(DeclareParameters),
    /// Submit an invoke transaction.
    AddInvokeTransaction {
        /// Calls in wire shape.
        calls: Vec<RequestCall>,
    },
    /// Sign typed data with the active account.
    SignTypedData(TypedData),
}

impl WalletRequest {
    /// Returns the request-type tag of this request.
    pub fn method(&self) -> RequestMethod {
        match self {
            WalletRequest::RequestChainId => RequestMethod::RequestChainId,
            WalletRequest::GetPermissions => RequestMethod::GetPermissions,
            WalletRequest::RequestAccounts { .. } => RequestMethod::RequestAccounts,
            WalletRequest::AddStarknetChain(_) => RequestMethod::AddStarknetChain,
            WalletRequest::WatchAsset(_) => RequestMethod::WatchAsset,
            WalletRequest::SwitchStarknetChain { .. } => RequestMethod::SwitchStarknetChain,
            WalletRequest::AddDeclareTransaction(_) => RequestMethod::AddDeclareTransaction,
            WalletRequest::AddInvokeTransaction { .. } => RequestMethod::AddInvokeTransaction,
            WalletRequest::SignTypedData(_) => RequestMethod::SignTypedData,
        }
    }

    /// Builds a typed request from a raw tag and JSON parameters.
    ///
    /// This is the entry point for generic wallet-request callers that carry
    /// the tag as a string. Unknown tags fail with `UnsupportedRequest`;
    /// requests whose parameters are required but absent fail with
    /// `MissingParameter` before any protocol call happens.
    pub fn from_raw(tag: &str, params: Option<serde_json::Value>) -> Result<Self> {
        let method = RequestMethod::from_str(tag)?;
        match method {
            RequestMethod::RequestChainId => Ok(WalletRequest::RequestChainId),
            RequestMethod::GetPermissions => Ok(WalletRequest::GetPermissions),
            RequestMethod::RequestAccounts => {
                let silent_mode = params
                    .as_ref()
                    .and_then(|p| p.get("silent_mode"))
                    .and_then(serde_json::Value::as_bool)
                    .unwrap_or(false);
                Ok(WalletRequest::RequestAccounts { silent_mode })
            }
            RequestMethod::AddStarknetChain => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                Ok(WalletRequest::AddStarknetChain(serde_json::from_value(
                    params,
                )?))
            }
            RequestMethod::WatchAsset => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                Ok(WalletRequest::WatchAsset(serde_json::from_value(params)?))
            }
            RequestMethod::SwitchStarknetChain => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                let chain_id = params
                    .get("chainId")
                    .and_then(serde_json::Value::as_str)
                    .ok_or(StarklineError::MissingParameter("chainId"))?;
                let chain_id = crate::chains::parse_wallet_standard_chain(chain_id)?;
                Ok(WalletRequest::SwitchStarknetChain { chain_id })
            }
            RequestMethod::AddDeclareTransaction => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                Ok(WalletRequest::AddDeclareTransaction(
                    serde_json::from_value(params)?,
                ))
            }
            RequestMethod::AddInvokeTransaction => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                let calls = params
                    .get("calls")
                    .cloned()
                    .ok_or(StarklineError::MissingParameter("calls"))?;
                Ok(WalletRequest::AddInvokeTransaction {
                    calls: serde_json::from_value(calls)?,
                })
            }
            RequestMethod::SignTypedData => {
                let params = params.ok_or(StarklineError::MissingParameter("params"))?;
                Ok(WalletRequest::SignTypedData(serde_json::from_value(
                    params,
                )?))
            }
        }
    }
}

/// A typed wallet response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WalletResponse {
    /// Current chain id as a 0x-prefixed lowercase hex string.
    ChainId(String),
    /// Granted permissions.
    Permissions(Vec<Permission>),
    /// Active account addresses.
    Accounts(Vec<Address>),
    /// Acknowledgement of add-chain, watch-asset, or switch-chain.
    Acknowledged(bool),
    /// Declare transaction result.
    Declare(DeclareResult),
    /// Invoke transaction result.
    Invoke(InvokeResult),
    /// Typed-data signature as a felt string list.
    Signature(Vec<String>),
}
