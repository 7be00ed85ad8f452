//! # mintgate-credential — Credential Issuance
//!
//! The gatekeeper-side half of the minting protocol: building a claim,
//! serializing it into the shared credential message encoding, signing it,
//! and handing the resulting [`MintCredential`] document to the author.
//!
//! The registry never sees this crate; it re-derives the same message
//! bytes from the claim fields submitted with the mint call. The symmetry
//! between the two sides is enforced by both calling
//! `CredentialMessage::new`, the single encoding path.

pub mod builder;
pub mod credential;

pub use builder::CredentialBuilder;
pub use credential::MintCredential;
