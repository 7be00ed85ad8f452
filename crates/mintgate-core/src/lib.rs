//! # mintgate-core — Foundational Types for the Mintgate Ledger
//!
//! This crate is the bedrock of the Mintgate workspace. It defines the
//! type-system primitives shared by the credential builder and the minting
//! registry. Every other crate in the workspace depends on `mintgate-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `ResourceId`,
//!    `TokenId` — no bare integers or strings for identifiers, so a token
//!    identifier can never be passed where a resource identifier is expected.
//!
//! 2. **Deterministic token-identifier codec.** `encode_token_id` and
//!    `decode_token_id` are exact inverses; the resource identity and mint
//!    sequence are recoverable from any token identifier without a lookup.
//!
//! 3. **One error enum per concern.** `MintError` is the protocol-visible
//!    rejection taxonomy; `TokenIdError` covers codec range violations;
//!    `CryptoError` is shared with `mintgate-crypto`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mintgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod claim;
pub mod error;
pub mod identity;
pub mod token;

// Re-export primary types for ergonomic imports.
pub use claim::MintClaim;
pub use error::{AddressError, CryptoError, MintError, TokenIdError};
pub use identity::Address;
pub use token::{
    decode_token_id, encode_token_id, ResourceId, TokenId, MAX_SEQUENCE, SEQUENCE_SPAN,
    TOKEN_ID_BASE,
};
