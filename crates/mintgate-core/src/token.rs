//! # Token Identifier Codec
//!
//! Deterministic encoding of `(resource, sequence)` pairs into globally
//! unique token identifiers, and the exact inverse decoding.
//!
//! ```text
//! token_id = TOKEN_ID_BASE + resource_id * SEQUENCE_SPAN + sequence
//! ```
//!
//! Embedding the resource identifier in the token identifier lets any
//! observer recover provenance without a registry lookup, at the cost of
//! bounding per-resource mints to `SEQUENCE_SPAN - 1`.
//!
//! Token identifiers are 128-bit so that every 64-bit resource identifier
//! encodes without overflow.
//!
//! ## Invariants
//!
//! - `0 < sequence < SEQUENCE_SPAN` — sequences are 1-based.
//! - `decode_token_id(encode_token_id(r, s)) == (r, s)` for every
//!   admissible pair; distinct pairs never collide.

use serde::{Deserialize, Serialize};

use crate::error::TokenIdError;

/// Offset that puts every token identifier above `10^11`.
pub const TOKEN_ID_BASE: u128 = 100_000_000_000;

/// Identifier range reserved per resource; also the resource multiplier.
pub const SEQUENCE_SPAN: u128 = 100_000;

/// Highest admissible sequence number within a resource.
pub const MAX_SEQUENCE: u32 = (SEQUENCE_SPAN - 1) as u32;

/// Identifier of a resource being tokenized (e.g. a numbered document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

/// Globally unique token identifier derived from `(resource, sequence)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u128);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource:{}", self.0)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a `(resource, sequence)` pair into a token identifier.
///
/// # Errors
///
/// Rejects `sequence == 0` and `sequence > MAX_SEQUENCE`; every resource
/// identifier is encodable.
pub fn encode_token_id(resource: ResourceId, sequence: u32) -> Result<TokenId, TokenIdError> {
    if sequence == 0 || sequence > MAX_SEQUENCE {
        return Err(TokenIdError::SequenceOutOfRange(sequence));
    }
    Ok(TokenId(
        TOKEN_ID_BASE + u128::from(resource.0) * SEQUENCE_SPAN + u128::from(sequence),
    ))
}

/// Decode a token identifier back into its `(resource, sequence)` pair.
///
/// Exact inverse of [`encode_token_id`].
///
/// # Errors
///
/// Rejects identifiers below [`TOKEN_ID_BASE`], identifiers whose
/// sequence component is zero, and identifiers whose resource component
/// exceeds 64 bits — none of these can be produced by the encoder.
pub fn decode_token_id(token: TokenId) -> Result<(ResourceId, u32), TokenIdError> {
    let offset = token
        .0
        .checked_sub(TOKEN_ID_BASE)
        .ok_or(TokenIdError::BelowBase(token.0))?;
    let sequence = offset % SEQUENCE_SPAN;
    if sequence == 0 {
        return Err(TokenIdError::ZeroSequence(token.0));
    }
    let resource = u64::try_from(offset / SEQUENCE_SPAN)
        .map_err(|_| TokenIdError::ResourceOutOfRange(token.0))?;
    Ok((ResourceId(resource), sequence as u32))
}
