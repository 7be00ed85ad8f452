//! # Per-Resource Issuance State
//!
//! One record per resource, created lazily by the first successful mint
//! and never deleted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use mintgate_core::Address;

/// Metadata captured from the mint that first touched a resource.
///
/// Populated exactly once, by the same mint that fixes the royalty
/// recipient; later mints for the resource may submit empty text fields
/// without disturbing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstMintMetadata {
    /// Free-text creation date from the first credential.
    pub date_created: String,
    /// Free-text description from the first credential.
    pub description: String,
}

/// Issuance state of a single resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Number of tokens minted so far; doubles as the last issued
    /// 1-based sequence number.
    pub mint_count: u32,
    /// Fixed by the first successful mint, `None` before it.
    pub royalty_recipient: Option<Address>,
    /// Captured by the first successful mint only.
    pub first_mint: Option<FirstMintMetadata>,
    /// Authors who already minted for this resource; each may appear
    /// at most once.
    pub minted_by: HashSet<Address>,
}

impl ResourceRecord {
    /// Whether `author` already holds a mint for this resource.
    pub fn has_minted(&self, author: Address) -> bool {
        self.minted_by.contains(&author)
    }
}
