//! # Recoverable ECDSA Signatures
//!
//! The 65-byte `r ‖ s ‖ v` signature format carried by credentials. The
//! trailing recovery byte `v` accepts both the ledger convention
//! (`27`/`28`) and the raw recovery identifier (`0`/`1`).
//!
//! ## Serde
//!
//! Signatures serialize/deserialize as 130-character hex strings.

use k256::ecdsa::RecoveryId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use mintgate_core::CryptoError;

/// A 65-byte recoverable ECDSA signature over a credential message.
#[derive(Clone, PartialEq, Eq)]
pub struct RecoverableSignature([u8; 65]);

impl RecoverableSignature {
    /// Create a signature from raw 65 bytes.
    pub fn from_bytes(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }

    /// Create a signature from a byte slice, which must be exactly 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 65] = bytes.try_into().map_err(|_| {
            CryptoError::MalformedSignature(format!("expected 65 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// Return the raw 65-byte signature.
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// The `r ‖ s` component for curve arithmetic.
    pub fn rs_bytes(&self) -> &[u8] {
        &self.0[..64]
    }

    /// The normalized recovery identifier.
    ///
    /// Accepts `v` in `{27, 28}` (ledger convention) or `{0, 1}` (raw).
    pub fn recovery_id(&self) -> Result<RecoveryId, CryptoError> {
        let v = self.0[64];
        let v = if v >= 27 { v - 27 } else { v };
        RecoveryId::from_byte(v)
            .ok_or_else(|| CryptoError::MalformedSignature(format!("invalid recovery byte {v}")))
    }

    /// Render the signature as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a signature from a 130-character hex string, with or without
    /// a `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 130 {
            return Err(CryptoError::MalformedSignature(format!(
                "signature hex must be 130 chars, got {}",
                hex.len()
            )));
        }
        let mut bytes = [0u8; 65];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            *chunk = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|e| {
                CryptoError::MalformedSignature(format!("invalid hex at position {}: {e}", i * 2))
            })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for RecoverableSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecoverableSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "RecoverableSignature({prefix}...)")
    }
}

impl std::fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
