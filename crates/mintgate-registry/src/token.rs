//! # Minted Tokens
//!
//! The ledger-resident record of a successful mint. Also what
//! `authenticated_mint` returns to the caller, making the new token
//! identifier externally discoverable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mintgate_core::{Address, ResourceId, TokenId};

/// A token minted by the registry.
///
/// Immutable once created. Exposes enough state (resource identity, mint
/// sequence, owner) for an external rendering collaborator to build a
/// presentation document from the token identifier alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintedToken {
    /// Globally unique identifier encoding `(resource, sequence)`.
    pub token_id: TokenId,
    /// The resource this token was minted for.
    pub resource_id: ResourceId,
    /// 1-based position in the resource's mint sequence.
    pub sequence: u32,
    /// The minting author; sole owner at creation.
    pub owner: Address,
    /// When the registry recorded the mint (UTC).
    pub minted_at: DateTime<Utc>,
}
