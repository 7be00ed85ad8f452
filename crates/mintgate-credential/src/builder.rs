//! # Credential Builder
//!
//! Deterministically serializes a claim into the shared credential message
//! encoding and signs it with the gatekeeper's private key. The encoding
//! MUST match the registry's verification encoding byte for byte; both
//! sides call [`CredentialMessage::new`], so the symmetry holds by
//! construction.

use chrono::Utc;

use mintgate_core::{Address, CryptoError, MintClaim};
use mintgate_crypto::{CredentialMessage, GatekeeperKeyPair};

use crate::credential::MintCredential;

/// Issues signed mint credentials on behalf of the gatekeeper.
#[derive(Debug)]
pub struct CredentialBuilder {
    keypair: GatekeeperKeyPair,
}

impl CredentialBuilder {
    /// Create a builder around the gatekeeper's keypair.
    pub fn new(keypair: GatekeeperKeyPair) -> Self {
        Self { keypair }
    }

    /// The gatekeeper address registries must be configured with for
    /// credentials from this builder to verify.
    pub fn gatekeeper_address(&self) -> Address {
        self.keypair.address()
    }

    /// Sign a claim into a credential document.
    pub fn issue(&self, claim: MintClaim) -> Result<MintCredential, CryptoError> {
        let message = CredentialMessage::new(&claim);
        let signature = self.keypair.sign(&message)?;
        Ok(MintCredential {
            claim,
            signature,
            issued_at: Utc::now(),
        })
    }
}
