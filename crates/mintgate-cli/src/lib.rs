//! # mintgate-cli — CLI Tool for the Mintgate Ledger
//!
//! Provides the `mintgate` command-line interface for the off-boundary
//! side of the protocol: everything a gatekeeper or author does before a
//! claim ever reaches a registry.
//!
//! ## Subcommands
//!
//! - `mintgate keygen` — Generate a gatekeeper secp256k1 keypair.
//! - `mintgate credential issue` — Sign a claim into a credential document.
//! - `mintgate credential verify` — Check a credential against a gatekeeper address.
//! - `mintgate token encode|decode` — Token identifier codec tooling.

pub mod credential;
pub mod keys;
pub mod token;
