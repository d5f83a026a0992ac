//! Error types for Starkline.
//!
//! This module provides the error hierarchy used across all Starkline crates,
//! built on `thiserror`. Configuration errors are fatal at construction time;
//! protocol errors propagate to the caller of the specific mutation and never
//! corrupt shared connection state.

use thiserror::Error;

use crate::chains::ChainId;

/// Result type alias using `StarklineError`.
pub type Result<T> = std::result::Result<T, StarklineError>;

/// Main error type for all Starkline operations.
#[derive(Debug, Error)]
pub enum StarklineError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS (fatal at construction)
    // ═══════════════════════════════════════════════════════════════════════════

    /// The configured chain list is empty or otherwise unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two configured chains share the same id.
    #[error("Duplicated chain id found: {0:#x}")]
    DuplicatedChainId(ChainId),

    /// The provider factory returned nothing for a configured chain.
    #[error("No provider found for chain {0}")]
    NoProviderForChain(String),

    /// The paymaster factory returned nothing for a configured chain.
    #[error("No paymaster provider found for chain {0}")]
    NoPaymasterForChain(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // WALLET PROTOCOL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The user declined the connect, request, or declare in the wallet.
    #[error("User rejected request")]
    UserRejected,

    /// Connect was attempted on a wallet that is not available.
    #[error("Wallet not available")]
    WalletUnavailable,

    /// The request tag is not part of the supported request set.
    #[error("Unsupported request type: {0}")]
    UnsupportedRequest(String),

    /// The wallet answered a request with a response of the wrong shape.
    #[error("Unexpected response for request {0}")]
    UnexpectedResponse(&'static str),

    /// No account exists at the wallet's current account index.
    #[error("No account available")]
    NoAccountAvailable,

    /// An operation that requires a connected wallet was called while
    /// disconnected.
    #[error("No wallet connected")]
    NotConnected,

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A required request or mutation argument is missing.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A wallet-standard chain identifier could not be parsed.
    #[error("Invalid chain identifier: {0}")]
    InvalidChainIdentifier(String),

    /// An address is not valid 0x-prefixed hex.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // COLLABORATOR ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A provider RPC call failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl StarklineError {
    /// Returns true if the user declined the operation in the wallet.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StarklineError::UserRejected)
    }

    /// Returns true if this error is fatal at construction time.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StarklineError::Config(_)
                | StarklineError::DuplicatedChainId(_)
                | StarklineError::NoProviderForChain(_)
                | StarklineError::NoPaymasterForChain(_)
        )
    }

    /// Returns true if this error fails a single request without affecting
    /// connection state.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            StarklineError::UserRejected
                | StarklineError::UnsupportedRequest(_)
                | StarklineError::UnexpectedResponse(_)
                | StarklineError::MissingParameter(_)
                | StarklineError::NoAccountAvailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StarklineError::DuplicatedChainId(0x534e5f4d41494e);
        assert!(err.to_string().contains("0x534e5f4d41494e"));

        let err = StarklineError::NoProviderForChain("Starknet Mainnet".into());
        assert!(err.to_string().contains("Starknet Mainnet"));
    }

    #[test]
    fn test_error_classification() {
        assert!(StarklineError::UserRejected.is_rejection());
        assert!(!StarklineError::WalletUnavailable.is_rejection());

        assert!(StarklineError::Config("empty chains".into()).is_config_error());
        assert!(StarklineError::DuplicatedChainId(1).is_config_error());
        assert!(!StarklineError::UserRejected.is_config_error());

        assert!(StarklineError::UnsupportedRequest("wallet_foo".into()).is_request_error());
        assert!(StarklineError::MissingParameter("class_hash").is_request_error());
        assert!(!StarklineError::NotConnected.is_request_error());
    }

    #[test]
    fn test_rejection_distinct_from_unavailable() {
        // The two connect failure modes must stay distinguishable.
        let rejected = StarklineError::UserRejected;
        let unavailable = StarklineError::WalletUnavailable;
        assert_ne!(rejected.to_string(), unavailable.to_string());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(StarklineError::from);
        assert!(matches!(result, Err(StarklineError::Json(_))));
    }
}
