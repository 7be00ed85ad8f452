//! # Gatekeeper Keypair
//!
//! The secp256k1 keypair the gatekeeper uses to sign credential messages.
//! Lives off the ledger boundary; the registry only ever sees the
//! gatekeeper's address.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&CredentialMessage`. Raw bytes cannot be
//!   signed, so every signature covers the fixed credential encoding.
//! - Private keys are never serialized or logged. `GatekeeperKeyPair`
//!   does not implement `Serialize`, and `Debug` redacts the key.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use mintgate_core::{Address, CryptoError};

use crate::message::CredentialMessage;
use crate::recover::{address_of, personal_message_hash};
use crate::signature::RecoverableSignature;

/// A secp256k1 keypair for issuing signed mint credentials.
pub struct GatekeeperKeyPair {
    signing_key: SigningKey,
}

impl GatekeeperKeyPair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a keypair from a raw 32-byte private scalar.
    ///
    /// # Errors
    ///
    /// Rejects the zero scalar and values at or beyond the curve order.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_slice(seed)
            .map_err(|e| CryptoError::KeyError(format!("invalid private key: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Parse a keypair from a 64-character hex private key.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 64 {
            return Err(CryptoError::KeyError(format!(
                "private key hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let mut seed = [0u8; 32];
        for (i, chunk) in seed.iter_mut().enumerate() {
            *chunk = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| CryptoError::KeyError(format!("invalid hex at position {}: {e}", i * 2)))?;
        }
        Self::from_seed(&seed)
    }

    /// Export the raw private scalar, for key files only.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// The address derived from this keypair's public key.
    pub fn address(&self) -> Address {
        address_of(self.signing_key.verifying_key())
    }

    /// Sign a credential message, producing a 65-byte recoverable
    /// signature with the ledger's `v ∈ {27, 28}` convention.
    pub fn sign(&self, message: &CredentialMessage) -> Result<RecoverableSignature, CryptoError> {
        let digest = personal_message_hash(message);
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| CryptoError::KeyError(format!("signing failed: {e}")))?;
        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        Ok(RecoverableSignature::from_bytes(bytes))
    }
}

impl std::fmt::Debug for GatekeeperKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GatekeeperKeyPair(<private>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintgate_core::{MintClaim, ResourceId};

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        let a = GatekeeperKeyPair::from_seed(&seed).unwrap();
        let b = GatekeeperKeyPair::from_seed(&seed).unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn zero_seed_rejected() {
        assert!(GatekeeperKeyPair::from_seed(&[0u8; 32]).is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let keypair = GatekeeperKeyPair::generate();
        let hex: String = keypair.to_bytes().iter().map(|b| format!("{b:02x}")).collect();
        let restored = GatekeeperKeyPair::from_hex(&hex).unwrap();
        assert_eq!(restored.address(), keypair.address());
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(GatekeeperKeyPair::from_hex("abcd").is_err());
        assert!(GatekeeperKeyPair::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn signature_uses_ledger_recovery_convention() {
        let keypair = GatekeeperKeyPair::generate();
        let message = CredentialMessage::new(&MintClaim::new(
            ResourceId(2981),
            2,
            Address::from_bytes([9; 20]),
            "",
            "",
        ));
        let signature = keypair.sign(&message).unwrap();
        let v = signature.as_bytes()[64];
        assert!(v == 27 || v == 28);
    }

    #[test]
    fn debug_does_not_leak_private_key() {
        let keypair = GatekeeperKeyPair::generate();
        assert_eq!(format!("{keypair:?}"), "GatekeeperKeyPair(<private>)");
    }
}
