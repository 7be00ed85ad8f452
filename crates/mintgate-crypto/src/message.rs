//! # Credential Message Encoding
//!
//! This module defines `CredentialMessage`, the sole construction path for
//! the bytes a gatekeeper signs and the registry verifies.
//!
//! ## Security Invariant
//!
//! The `CredentialMessage` newtype has a private inner field. The only way
//! to construct it is through `CredentialMessage::new()`, which applies the
//! fixed field layout below. Any function signing or verifying credential
//! bytes must accept `&CredentialMessage`, so the builder and the registry
//! cannot drift apart in how they serialize a claim.
//!
//! ## Wire Layout
//!
//! Five segments concatenated in order, no delimiters:
//!
//! ```text
//! resource_id    12 bytes, big-endian, zero-padded
//! allowed_mints   1 byte
//! author         20 bytes, raw address
//! date_created   variable, UTF-8 (may be empty)
//! description    variable, UTF-8 (may be empty)
//! ```
//!
//! The numeric widths are protocol constants. The two trailing text fields
//! carry no length prefix: they are never decoded back out of the message.
//! The registry re-derives the full byte string from the claim it was
//! handed and verifies the signature over it, so the boundary between the
//! adjacent text fields never needs to be recoverable.

use mintgate_core::MintClaim;

/// Fixed big-endian width of the resource identifier segment.
pub const RESOURCE_ID_WIDTH: usize = 12;

/// Fixed width of the allowance segment.
pub const ALLOWED_MINTS_WIDTH: usize = 1;

/// The signable byte encoding of a mint claim.
///
/// # Invariants
///
/// - The only constructor is `CredentialMessage::new()`.
/// - Field order and widths are fixed protocol constants; both signing
///   and verification flow through the identical encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialMessage(Vec<u8>);

impl CredentialMessage {
    /// Encode a claim into its signable byte message.
    ///
    /// Pure function of the claim; no side effects.
    pub fn new(claim: &MintClaim) -> Self {
        let mut buf = Vec::with_capacity(
            RESOURCE_ID_WIDTH
                + ALLOWED_MINTS_WIDTH
                + 20
                + claim.date_created.len()
                + claim.description.len(),
        );
        buf.extend_from_slice(&[0u8; RESOURCE_ID_WIDTH - 8]);
        buf.extend_from_slice(&claim.resource_id.0.to_be_bytes());
        buf.push(claim.allowed_mints);
        buf.extend_from_slice(claim.author.as_bytes());
        buf.extend_from_slice(claim.date_created.as_bytes());
        buf.extend_from_slice(claim.description.as_bytes());
        Self(buf)
    }

    /// Access the message bytes for hashing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the encoded message in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the message is empty (never true for a real claim).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CredentialMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
