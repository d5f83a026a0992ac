//! Starknet addresses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarklineError};

/// Number of hex digits in a normalized address.
const ADDRESS_HEX_LEN: usize = 64;

/// A normalized Starknet address.
///
/// Addresses are stored lowercase, 0x-prefixed, and left-padded to 64 hex
/// digits so that equality checks and map keys behave, regardless of how the
/// wallet formatted the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parses and normalizes an address.
    ///
    /// Accepts any 0x-prefixed hex string of at most 64 digits.
    pub fn parse(value: &str) -> Result<Self> {
        let hex_part = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| StarklineError::InvalidAddress(value.into()))?;

        if hex_part.is_empty() || hex_part.len() > ADDRESS_HEX_LEN {
            return Err(StarklineError::InvalidAddress(value.into()));
        }

        let mut padded = String::with_capacity(ADDRESS_HEX_LEN);
        for _ in hex_part.len()..ADDRESS_HEX_LEN {
            padded.push('0');
        }
        padded.push_str(&hex_part.to_lowercase());

        // Round-trip through the decoder to reject non-hex digits.
        hex::decode(&padded)?;

        Ok(Self(format!("0x{padded}")))
    }

    /// Returns the normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
