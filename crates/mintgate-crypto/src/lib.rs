//! # mintgate-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for the Mintgate ledger:
//!
//! - **Credential message encoding** — the byte-exact serialization of a
//!   mint claim shared verbatim between the credential builder and the
//!   registry's verification path.
//! - **Personal-message hashing** — Keccak-256 over the standard
//!   `\x19Ethereum Signed Message:\n` domain-separation prefix.
//! - **Recoverable ECDSA (secp256k1)** — 65-byte `r ‖ s ‖ v` signatures,
//!   signer-address recovery, and the gatekeeper keypair.
//!
//! ## Crate Policy
//!
//! - Depends only on `mintgate-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   `CredentialMessage` bytes, real Keccak-256, real secp256k1.
//! - `unsafe` prohibited.

pub mod message;
pub mod recover;
pub mod signature;
pub mod signer;

pub use message::CredentialMessage;
pub use recover::{address_of, personal_message_hash, recover_signer};
pub use signature::RecoverableSignature;
pub use signer::GatekeeperKeyPair;
