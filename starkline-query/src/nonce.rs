//! Nonce-for-address query.
//!
//! The query key identifies the (address, block) pair; the query fn validates
//! its arguments synchronously before touching the provider.

use serde_json::{json, Value};

use starkline_core::error::{Result, StarklineError};
use starkline_core::traits::ChainProvider;
use starkline_core::types::Address;

/// Query key for the nonce of an address at an optional block tag.
pub fn nonce_for_address_query_key(
    address: Option<&Address>,
    block_identifier: Option<&str>,
) -> Value {
    json!([{
        "entity": "nonce",
        "blockIdentifier": block_identifier,
        "address": address,
    }])
}

/// Fetches the nonce of an address.
///
/// A missing address fails with a typed error before any provider call.
pub async fn nonce_for_address(
    provider: &dyn ChainProvider,
    address: Option<&Address>,
    block_identifier: Option<&str>,
) -> Result<String> {
    let address = address.ok_or(StarklineError::MissingParameter("address"))?;
    provider.nonce_for_address(address, block_identifier).await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use starkline_core::chains::ChainId;

    use super::*;

    struct FixedNonceProvider;

    #[async_trait]
    impl ChainProvider for FixedNonceProvider {
        async fn chain_id(&self) -> Result<ChainId> {
            Ok(0x1)
        }

        async fn nonce_for_address(
            &self,
            address: &Address,
            _block_identifier: Option<&str>,
        ) -> Result<String> {
            assert_eq!(address, &Address::parse("0x1").unwrap());
            Ok("0x7".into())
        }
    }

    #[test]
    fn test_key_carries_address_and_block() {
        let address = Address::parse("0x1").unwrap();
        let key = nonce_for_address_query_key(Some(&address), Some("latest"));
        assert_eq!(key[0]["entity"], "nonce");
        assert_eq!(key[0]["blockIdentifier"], "latest");
        assert_eq!(key[0]["address"], address.as_str());

        let key = nonce_for_address_query_key(None, None);
        assert!(key[0]["address"].is_null());
    }

    #[tokio::test]
    async fn test_missing_address_fails_before_provider_call() {
        let err = nonce_for_address(&FixedNonceProvider, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StarklineError::MissingParameter("address")));
    }

    #[tokio::test]
    async fn test_fetches_nonce() {
        let address = Address::parse("0x1").unwrap();
        let nonce = nonce_for_address(&FixedNonceProvider, Some(&address), None)
            .await
            .unwrap();
        assert_eq!(nonce, "0x7");
    }
}
