//! # Account Addresses
//!
//! The 20-byte account address newtype used for authors, the gatekeeper
//! identity, and royalty recipients.
//!
//! ## Serde
//!
//! Addresses serialize as lowercase `0x`-prefixed hex strings and accept
//! either prefixed or bare hex on deserialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

/// A 20-byte account address.
///
/// The zero address is the "no recipient" sentinel used by royalty
/// queries before a resource's first mint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zeroes sentinel address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create an address from raw 20 bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Return the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the zero sentinel address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Render the address as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        let body: String = self.0.iter().map(|b| format!("{b:02x}")).collect();
        format!("0x{body}")
    }

    /// Parse an address from hex, with or without the `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self, AddressError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")).unwrap_or(hex);
        if hex.len() != 40 {
            return Err(AddressError::BadLength(hex.len()));
        }
        let mut bytes = [0u8; 20];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *chunk = u8::from_str_radix(pair, 16)
                .map_err(|_| AddressError::BadHex(pair.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "Address(0x{prefix}...)")
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
