//! # mintgate-registry — The Minting Registry
//!
//! The only stateful component of the Mintgate protocol. Holds
//! per-resource issuance state, verifies gatekeeper credentials, enforces
//! quotas and author uniqueness, mints deterministic token identifiers,
//! and answers royalty and ownership queries.
//!
//! ## Atomicity
//!
//! Every mutating call validates completely before touching state: a
//! rejected mint leaves the registry bit-for-bit unchanged. The `&mut
//! self` receiver gives the single-writer discipline the surrounding
//! ledger environment imposes; no two mutating calls can interleave
//! their read-check-write sequence.

pub mod registry;
pub mod resource;
pub mod token;

pub use registry::{MintingRegistry, RegistryError, RoyaltyInfo, DEFAULT_ROYALTY_BPS};
pub use resource::{FirstMintMetadata, ResourceRecord};
pub use token::MintedToken;
