//! # Signer Recovery
//!
//! Recovers the signing address from a recoverable ECDSA signature over a
//! domain-separated credential message hash. Pure functions, no state.
//!
//! The registry compares the recovered address against its configured
//! gatekeeper identity; it never needs the gatekeeper's public key.

use k256::ecdsa::{Signature, VerifyingKey};
use sha3::{Digest, Keccak256};

use mintgate_core::{Address, CryptoError};

use crate::message::CredentialMessage;
use crate::signature::RecoverableSignature;

/// Domain-separation prefix of the standard personal-message convention.
const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Keccak-256 digest of a credential message under the personal-message
/// convention: `keccak256(prefix ‖ decimal(len) ‖ message)`.
pub fn personal_message_hash(message: &CredentialMessage) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

/// Recover the address that signed `message`.
///
/// # Errors
///
/// Fails on structurally invalid signatures and on points that do not
/// recover. Callers enforcing authorization must treat every error the
/// same as a wrong-signer result; the distinction is not exposed past
/// the registry boundary.
pub fn recover_signer(
    message: &CredentialMessage,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    let digest = personal_message_hash(message);
    let sig = Signature::from_slice(signature.rs_bytes())
        .map_err(|e| CryptoError::MalformedSignature(format!("invalid r/s encoding: {e}")))?;
    let recovery_id = signature.recovery_id()?;
    let key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|e| CryptoError::VerificationFailed(format!("recovery failed: {e}")))?;
    Ok(address_of(&key))
}

/// Derive the address of a secp256k1 public key: the last 20 bytes of the
/// Keccak-256 digest of the uncompressed point, tag byte excluded.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = Keccak256::digest(&point.as_bytes()[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::from_bytes(bytes)
}
