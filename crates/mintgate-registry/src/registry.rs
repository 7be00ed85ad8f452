//! # Minting Registry
//!
//! Credential-gated issuance: `authenticated_mint` verifies a
//! gatekeeper-signed claim, enforces per-resource quota and author
//! uniqueness, and mints a deterministic token identifier.
//!
//! ## Check Order
//!
//! 1. sender equals the claimed author, else `WrongSender`
//! 2. signature recovers to the gatekeeper, else `NotAuthorized`
//! 3. author has not minted this resource, else `AlreadyMinted`
//! 4. mint count below the credential's allowance, else `TooManyMints`
//!
//! The first failing check short-circuits, and no state is mutated until
//! all checks (and the token-identifier encoding) have passed.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mintgate_core::{
    decode_token_id, encode_token_id, Address, MintClaim, MintError, ResourceId, TokenId,
    TokenIdError,
};
use mintgate_crypto::{recover_signer, CredentialMessage, RecoverableSignature};

use crate::resource::{FirstMintMetadata, ResourceRecord};
use crate::token::MintedToken;

/// Royalty share fixed at first mint: 250 basis points (2.5%).
pub const DEFAULT_ROYALTY_BPS: u16 = 250;

/// Basis-point denominator.
const BPS_DENOMINATOR: u128 = 10_000;

/// Errors from registry queries and construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No token with this identifier has been minted.
    #[error("unknown token {0}")]
    UnknownToken(TokenId),

    /// Royalty basis points beyond the denominator would pay out more
    /// than the sale price.
    #[error("royalty basis points {0} exceed the denominator")]
    RoyaltyBpsOutOfRange(u16),
}

/// A royalty query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyInfo {
    /// The royalty beneficiary; the zero address before a resource's
    /// first mint.
    pub recipient: Address,
    /// `floor(sale_price * bps / 10_000)`; zero before the first mint.
    pub amount: u128,
}

/// The authorization-gated issuance ledger.
///
/// The gatekeeper identity and royalty share are fixed at construction
/// and immutable thereafter. Quotas are per-credential, not per-resource:
/// the registry only ever compares a resource's current mint count
/// against the allowance declared in the credential presented with the
/// call, so different credentials for one resource may enforce different
/// ceilings.
#[derive(Debug, Clone)]
pub struct MintingRegistry {
    gatekeeper: Address,
    royalty_bps: u16,
    resources: HashMap<ResourceId, ResourceRecord>,
    tokens: BTreeMap<TokenId, MintedToken>,
}

impl MintingRegistry {
    /// Create a registry trusting `gatekeeper`, with the standard 2.5%
    /// royalty share.
    pub fn new(gatekeeper: Address) -> Self {
        Self {
            gatekeeper,
            royalty_bps: DEFAULT_ROYALTY_BPS,
            resources: HashMap::new(),
            tokens: BTreeMap::new(),
        }
    }

    /// Create a registry with an explicit royalty share in basis points.
    ///
    /// # Errors
    ///
    /// Rejects `royalty_bps > 10_000`.
    pub fn with_royalty_bps(gatekeeper: Address, royalty_bps: u16) -> Result<Self, RegistryError> {
        if u128::from(royalty_bps) > BPS_DENOMINATOR {
            return Err(RegistryError::RoyaltyBpsOutOfRange(royalty_bps));
        }
        Ok(Self {
            gatekeeper,
            royalty_bps,
            resources: HashMap::new(),
            tokens: BTreeMap::new(),
        })
    }

    /// The trusted gatekeeper address.
    pub fn gatekeeper(&self) -> Address {
        self.gatekeeper
    }

    /// The configured royalty share in basis points.
    pub fn royalty_bps(&self) -> u16 {
        self.royalty_bps
    }

    /// Mint a token for `claim.author`, gated on a gatekeeper credential.
    ///
    /// `sender` is the caller identity reported by the execution
    /// environment. All checks pass or nothing changes; the returned
    /// [`MintedToken`] is the observable record of the mint.
    pub fn authenticated_mint(
        &mut self,
        sender: Address,
        claim: &MintClaim,
        signature: &RecoverableSignature,
    ) -> Result<MintedToken, MintError> {
        if sender != claim.author {
            tracing::debug!(%sender, author = %claim.author, "mint rejected: wrong sender");
            return Err(MintError::WrongSender);
        }
        if !self.credential_is_valid(claim, signature) {
            tracing::debug!(resource = %claim.resource_id, "mint rejected: not authorized");
            return Err(MintError::NotAuthorized);
        }

        let record = self.resources.get(&claim.resource_id);
        if record.is_some_and(|r| r.has_minted(claim.author)) {
            tracing::debug!(resource = %claim.resource_id, author = %claim.author, "mint rejected: already minted");
            return Err(MintError::AlreadyMinted);
        }
        let mint_count = record.map_or(0, |r| r.mint_count);
        if mint_count >= u32::from(claim.allowed_mints) {
            tracing::debug!(resource = %claim.resource_id, mint_count, "mint rejected: too many mints");
            return Err(MintError::TooManyMints);
        }

        // Still part of the check phase. The sequence is bounded by the
        // u8 allowance, far below the span; if the codec ever rejects it,
        // that is a quota failure.
        let sequence = mint_count + 1;
        let token_id = encode_token_id(claim.resource_id, sequence)
            .map_err(|_| MintError::TooManyMints)?;

        // All checks passed; mutate.
        let record = self.resources.entry(claim.resource_id).or_default();
        record.mint_count = sequence;
        record.minted_by.insert(claim.author);
        if record.royalty_recipient.is_none() {
            record.royalty_recipient = Some(claim.author);
            record.first_mint = Some(FirstMintMetadata {
                date_created: claim.date_created.clone(),
                description: claim.description.clone(),
            });
        }

        let token = MintedToken {
            token_id,
            resource_id: claim.resource_id,
            sequence,
            owner: claim.author,
            minted_at: Utc::now(),
        };
        self.tokens.insert(token_id, token.clone());
        tracing::info!(%token_id, resource = %claim.resource_id, owner = %claim.author, sequence, "minted token");
        Ok(token)
    }

    /// Pre-validate a credential without sender or state checks and
    /// without mutation.
    ///
    /// True exactly when the signature recovers to the gatekeeper.
    pub fn verify_mint(&self, claim: &MintClaim, signature: &RecoverableSignature) -> bool {
        self.credential_is_valid(claim, signature)
    }

    /// Royalty recipient and amount for a sale of `token_id` at
    /// `sale_price`.
    ///
    /// Safe to call before any mint exists for the token's resource: the
    /// recipient is then the zero address and the amount zero. Pure read.
    pub fn royalty_info(
        &self,
        token_id: TokenId,
        sale_price: u128,
    ) -> Result<RoyaltyInfo, TokenIdError> {
        let (resource_id, _) = decode_token_id(token_id)?;
        match self
            .resources
            .get(&resource_id)
            .and_then(|r| r.royalty_recipient)
        {
            None => Ok(RoyaltyInfo {
                recipient: Address::ZERO,
                amount: 0,
            }),
            Some(recipient) => Ok(RoyaltyInfo {
                recipient,
                amount: royalty_amount(sale_price, self.royalty_bps),
            }),
        }
    }

    /// The owner of a minted token.
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError> {
        self.tokens
            .get(&token_id)
            .map(|t| t.owner)
            .ok_or(RegistryError::UnknownToken(token_id))
    }

    /// Full record of a minted token, if it exists.
    pub fn token(&self, token_id: TokenId) -> Option<&MintedToken> {
        self.tokens.get(&token_id)
    }

    /// Issuance state of a resource, if any mint has touched it.
    pub fn resource(&self, resource_id: ResourceId) -> Option<&ResourceRecord> {
        self.resources.get(&resource_id)
    }

    /// Number of tokens minted for a resource so far.
    pub fn mint_count(&self, resource_id: ResourceId) -> u32 {
        self.resources.get(&resource_id).map_or(0, |r| r.mint_count)
    }

    /// Recompute the credential message and compare the recovered signer
    /// against the gatekeeper. Malformed signatures and wrong signers are
    /// deliberately indistinguishable here.
    fn credential_is_valid(&self, claim: &MintClaim, signature: &RecoverableSignature) -> bool {
        let message = CredentialMessage::new(claim);
        match recover_signer(&message, signature) {
            Ok(signer) => signer == self.gatekeeper,
            Err(_) => false,
        }
    }
}

/// `floor(sale_price * bps / 10_000)` without intermediate overflow.
///
/// Uses the split identity `(p / d) * b + ((p % d) * b) / d`, exact for
/// the full `u128` price range since `b <= d = 10_000`.
fn royalty_amount(sale_price: u128, bps: u16) -> u128 {
    let bps = u128::from(bps);
    (sale_price / BPS_DENOMINATOR) * bps + (sale_price % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn royalty_amount_known_values() {
        // 2.5% of 10^18
        assert_eq!(
            royalty_amount(1_000_000_000_000_000_000, 250),
            25_000_000_000_000_000
        );
        assert_eq!(royalty_amount(10_000, 250), 250);
        assert_eq!(royalty_amount(0, 250), 0);
    }

    #[test]
    fn royalty_amount_floors() {
        // 2.5% of 39 = 0.975
        assert_eq!(royalty_amount(39, 250), 0);
        // 2.5% of 41 = 1.025
        assert_eq!(royalty_amount(41, 250), 1);
    }

    #[test]
    fn royalty_amount_no_overflow_at_max_price() {
        let expected = (u128::MAX / 10_000) * 250 + (u128::MAX % 10_000) * 250 / 10_000;
        assert_eq!(royalty_amount(u128::MAX, 250), expected);
    }

    #[test]
    fn royalty_amount_full_share() {
        assert_eq!(royalty_amount(123_456, 10_000), 123_456);
    }

    #[test]
    fn bps_validation() {
        let gatekeeper = Address::from_bytes([1; 20]);
        assert!(MintingRegistry::with_royalty_bps(gatekeeper, 10_000).is_ok());
        assert_eq!(
            MintingRegistry::with_royalty_bps(gatekeeper, 10_001).unwrap_err(),
            RegistryError::RoyaltyBpsOutOfRange(10_001)
        );
    }

    #[test]
    fn defaults() {
        let registry = MintingRegistry::new(Address::from_bytes([1; 20]));
        assert_eq!(registry.royalty_bps(), DEFAULT_ROYALTY_BPS);
        assert_eq!(registry.gatekeeper(), Address::from_bytes([1; 20]));
        assert_eq!(registry.mint_count(ResourceId(1559)), 0);
    }
}
