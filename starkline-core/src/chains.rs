//! Chain definitions and wallet-standard chain identifiers.
//!
//! A [`Chain`] describes a network target the host application supports. The
//! built-in chains mirror the public Starknet networks; applications can add
//! their own as long as ids stay unique.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarklineError};
use crate::types::Address;

/// Chain identifier.
///
/// Starknet chain ids are short-string felts (`SN_SEPOLIA` does not fit in 64
/// bits), so the full value is carried as a `u128`.
pub type ChainId = u128;

/// Chain id of Starknet mainnet (`SN_MAIN`).
pub const MAINNET_ID: ChainId = 0x534e5f4d41494e;

/// Chain id of the Sepolia testnet (`SN_SEPOLIA`).
pub const SEPOLIA_ID: ChainId = 0x534e5f5345504f4c4941;

/// Chain id of the local devnet (`SN_DEVNET`).
pub const DEVNET_ID: ChainId = 0x534e5f4445564e4554;

/// Native currency of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// ERC-20 contract address of the fee token.
    pub address: Address,
    /// Display symbol.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
}

/// A configured blockchain network target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    /// Unique chain id.
    pub id: ChainId,
    /// Human-readable name.
    pub name: String,
    /// Network identifier used in query keys.
    pub network: String,
    /// Fee token of the chain.
    pub native_currency: NativeCurrency,
}

fn eth_fee_token() -> NativeCurrency {
    NativeCurrency {
        address: Address::parse(
            "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
        )
        .expect("static fee token address is valid"),
        symbol: "ETH".into(),
        decimals: 18,
    }
}

/// Starknet mainnet.
pub fn mainnet() -> Chain {
    Chain {
        id: MAINNET_ID,
        name: "Starknet".into(),
        network: "mainnet".into(),
        native_currency: eth_fee_token(),
    }
}

/// Starknet Sepolia testnet.
pub fn sepolia() -> Chain {
    Chain {
        id: SEPOLIA_ID,
        name: "Starknet Sepolia Testnet".into(),
        network: "sepolia".into(),
        native_currency: eth_fee_token(),
    }
}

/// Local Starknet devnet.
pub fn devnet() -> Chain {
    Chain {
        id: DEVNET_ID,
        name: "Starknet Devnet".into(),
        network: "devnet".into(),
        native_currency: eth_fee_token(),
    }
}

/// Maps a chain id to the SDK's short-string chain id constant.
///
/// Returns `None` for chains the SDK has no constant for (devnet, custom
/// chains).
pub fn starknet_chain_id(id: ChainId) -> Option<&'static str> {
    match id {
        MAINNET_ID => Some("SN_MAIN"),
        SEPOLIA_ID => Some("SN_SEPOLIA"),
        _ => None,
    }
}

/// Formats a chain as a wallet-standard chain identifier,
/// e.g. `starknet:0x534e5f4d41494e`.
pub fn chain_to_wallet_standard(chain: &Chain) -> String {
    chain_id_to_wallet_standard(chain.id)
}

/// Formats a chain id as a wallet-standard chain identifier.
pub fn chain_id_to_wallet_standard(id: ChainId) -> String {
    format!("starknet:0x{id:x}")
}

/// Parses a wallet-standard chain identifier back into a chain id.
///
/// Wallets emit identifiers of the form `<namespace>:<hex id>`. Only the last
/// segment is interpreted; a missing or unparsable hex suffix is an error the
/// caller is expected to log and skip.
pub fn parse_wallet_standard_chain(identifier: &str) -> Result<ChainId> {
    let suffix = identifier
        .rsplit(':')
        .next()
        .ok_or_else(|| StarklineError::InvalidChainIdentifier(identifier.into()))?;
    let hex_part = suffix.strip_prefix("0x").unwrap_or(suffix);
    if hex_part.is_empty() {
        return Err(StarklineError::InvalidChainIdentifier(identifier.into()));
    }
    ChainId::from_str_radix(hex_part, 16)
        .map_err(|_| StarklineError::InvalidChainIdentifier(identifier.into()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_builtin_chain_ids_are_unique() {
        let ids = [mainnet().id, sepolia().id, devnet().id];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_wallet_standard_format() {
        assert_eq!(
            chain_to_wallet_standard(&mainnet()),
            format!("starknet:0x{:x}", MAINNET_ID)
        );
        assert_eq!(
            chain_id_to_wallet_standard(SEPOLIA_ID),
            "starknet:0x534e5f5345504f4c4941"
        );
    }

    #[test_case("starknet:0x534e5f4d41494e", MAINNET_ID; "mainnet")]
    #[test_case("starknet:0x534e5f5345504f4c4941", SEPOLIA_ID; "sepolia")]
    #[test_case("0x1", 1; "bare hex with prefix")]
    #[test_case("starknet:2a", 0x2a; "no 0x prefix")]
    fn test_parse_wallet_standard(identifier: &str, expected: ChainId) {
        assert_eq!(parse_wallet_standard_chain(identifier).unwrap(), expected);
    }

    #[test_case("starknet:"; "empty suffix")]
    #[test_case("starknet:0x"; "empty hex")]
    #[test_case("starknet:zzzz"; "not hex")]
    fn test_parse_wallet_standard_malformed(identifier: &str) {
        assert!(matches!(
            parse_wallet_standard_chain(identifier),
            Err(StarklineError::InvalidChainIdentifier(_))
        ));
    }

    #[test]
    fn test_starknet_chain_id_mapping() {
        assert_eq!(starknet_chain_id(MAINNET_ID), Some("SN_MAIN"));
        assert_eq!(starknet_chain_id(SEPOLIA_ID), Some("SN_SEPOLIA"));
        assert_eq!(starknet_chain_id(DEVNET_ID), None);
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_preserves_id(id in any::<u128>()) {
            let identifier = chain_id_to_wallet_standard(id);
            prop_assert_eq!(parse_wallet_standard_chain(&identifier).unwrap(), id);
        }
    }
}
