//! Wallet change-event payloads.

use serde::{Deserialize, Serialize};

use super::Address;

/// An account entry as the wallet exposes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccountInfo {
    /// Account address.
    pub address: Address,
    /// Wallet-standard chain identifiers the account is active on.
    #[serde(default)]
    pub chains: Vec<String>,
}

/// Payload of the wallet-emitted `change` event.
///
/// A field that is `None` was not part of the notification; an empty accounts
/// list means the wallet disconnected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Updated account list, when accounts changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<WalletAccountInfo>>,
    /// Updated chain identifiers, when the active chain changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chains: Option<Vec<String>>,
}

impl ChangeEvent {
    /// Returns true if the event signals a disconnect (no accounts left).
    pub fn is_disconnect(&self) -> bool {
        self.accounts.as_ref().map_or(true, |a| a.is_empty())
    }

    /// Returns the first account's address, if any.
    pub fn first_address(&self) -> Option<&Address> {
        self.accounts.as_ref()?.first().map(|info| &info.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(address: &str) -> WalletAccountInfo {
        WalletAccountInfo {
            address: Address::parse(address).unwrap(),
            chains: vec![],
        }
    }

    #[test]
    fn test_is_disconnect() {
        assert!(ChangeEvent::default().is_disconnect());
        assert!(ChangeEvent {
            accounts: Some(vec![]),
            chains: None,
        }
        .is_disconnect());
        assert!(!ChangeEvent {
            accounts: Some(vec![account("0x1")]),
            chains: None,
        }
        .is_disconnect());
    }

    #[test]
    fn test_first_address() {
        let event = ChangeEvent {
            accounts: Some(vec![account("0x1"), account("0x2")]),
            chains: None,
        };
        assert_eq!(event.first_address(), Some(&Address::parse("0x1").unwrap()));
        assert_eq!(ChangeEvent::default().first_address(), None);
    }
}
