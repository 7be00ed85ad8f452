//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Mintgate workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `MintError` is the protocol-visible rejection taxonomy. Its four
//!   variants map one-to-one onto the named failure reasons of the minting
//!   protocol; callers see exactly one of them per rejected mint, and never
//!   a partial state change.
//! - `CryptoError` carries full context internally, but the registry
//!   collapses every crypto failure into `MintError::NotAuthorized` so that
//!   malformed signatures and wrong-signer signatures are indistinguishable
//!   to callers.

use thiserror::Error;

/// Rejection reasons for an authenticated mint.
///
/// Checks run in declaration order and the first failing check
/// short-circuits; no state mutation occurs on any failure path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintError {
    /// The transaction sender is not the claimed author.
    #[error("wrong sender")]
    WrongSender,

    /// The signature does not recover to the gatekeeper identity.
    ///
    /// Covers both malformed and wrong-signer signatures; callers cannot
    /// probe why a signature failed.
    #[error("not authorized")]
    NotAuthorized,

    /// The author already holds a mint for this resource.
    #[error("already minted")]
    AlreadyMinted,

    /// The resource's mint count has reached the credential's declared
    /// allowance.
    #[error("too many mints")]
    TooManyMints,
}

/// Range violations in the token-identifier codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenIdError {
    /// Sequence numbers are 1-based and bounded by the per-resource span.
    #[error("sequence number {0} is outside 1..=99999")]
    SequenceOutOfRange(u32),

    /// The token identifier is below the encoding base and cannot have
    /// been produced by `encode_token_id`.
    #[error("token id {0} is below the encoding base")]
    BelowBase(u128),

    /// The token identifier has a zero sequence component; sequences
    /// start at 1.
    #[error("token id {0} has a zero sequence component")]
    ZeroSequence(u128),

    /// The token identifier's resource component does not fit a 64-bit
    /// resource id.
    #[error("token id {0} has an oversized resource component")]
    ResourceOutOfRange(u128),
}

/// Error in cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signer recovery failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// The signature bytes are structurally invalid.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),
}

/// Error parsing an address from its hex representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// An address is 20 bytes, rendered as 40 hex characters.
    #[error("address hex must be 40 chars, got {0}")]
    BadLength(usize),

    /// A character outside `[0-9a-fA-F]` was encountered.
    #[error("invalid hex in address: {0}")]
    BadHex(String),
}
