//! # Mint Claims
//!
//! A claim is the unsigned payload of a credential: which author may mint
//! for which resource, under what declared allowance, with optional
//! first-mint metadata.

use serde::{Deserialize, Serialize};

use crate::identity::Address;
use crate::token::ResourceId;

/// The unsigned content of a mint credential.
///
/// The quota is a property of each credential, not of the resource: two
/// credentials for the same resource may declare different allowances,
/// and the registry enforces whichever allowance the presented credential
/// carries at the time of the check.
///
/// `date_created` and `description` matter only for a resource's first
/// mint, where they are captured as the resource's permanent first-mint
/// metadata; later claims for the same resource may leave them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintClaim {
    /// The resource the author is authorized to mint for.
    pub resource_id: ResourceId,
    /// Declared per-resource mint ceiling, enforced at mint time.
    pub allowed_mints: u8,
    /// The author being authorized; must match the transaction sender.
    pub author: Address,
    /// Free-text creation date, captured on first mint only.
    pub date_created: String,
    /// Free-text description, captured on first mint only.
    pub description: String,
}

impl MintClaim {
    /// Build a claim for the given resource, allowance, and author.
    pub fn new(
        resource_id: ResourceId,
        allowed_mints: u8,
        author: Address,
        date_created: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            resource_id,
            allowed_mints,
            author,
            date_created: date_created.into(),
            description: description.into(),
        }
    }
}
