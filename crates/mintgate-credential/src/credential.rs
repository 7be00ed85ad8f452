//! # Mint Credential Document
//!
//! The signed credential a gatekeeper hands to an author. JSON is the
//! interchange format; the signature covers the claim's byte encoding,
//! never the JSON itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mintgate_core::{Address, MintClaim};
use mintgate_crypto::{recover_signer, CredentialMessage, RecoverableSignature};

/// A gatekeeper-signed authorization for one author to mint one resource.
///
/// Not persisted by the registry; verified and consumed per call. The
/// `issued_at` timestamp is document metadata only and is not covered by
/// the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintCredential {
    /// The authorized claim.
    pub claim: MintClaim,
    /// Recoverable signature over the claim's credential message.
    pub signature: RecoverableSignature,
    /// When the gatekeeper issued this credential (UTC).
    pub issued_at: DateTime<Utc>,
}

impl MintCredential {
    /// Whether this credential's signature recovers to `gatekeeper`.
    ///
    /// Malformed signatures verify false, indistinguishable from
    /// wrong-signer signatures.
    pub fn verifies_against(&self, gatekeeper: Address) -> bool {
        let message = CredentialMessage::new(&self.claim);
        match recover_signer(&message, &self.signature) {
            Ok(signer) => signer == gatekeeper,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CredentialBuilder;
    use mintgate_core::ResourceId;
    use mintgate_crypto::GatekeeperKeyPair;

    #[test]
    fn serde_json_roundtrip_preserves_validity() {
        let builder = CredentialBuilder::new(GatekeeperKeyPair::generate());
        let gatekeeper = builder.gatekeeper_address();
        let credential = builder
            .issue(MintClaim::new(
                ResourceId(1559),
                2,
                Address::from_bytes([3; 20]),
                "2020-09-15",
                "NFT Royalty Standard",
            ))
            .unwrap();

        let json = serde_json::to_string_pretty(&credential).unwrap();
        let restored: MintCredential = serde_json::from_str(&json).unwrap();
        assert!(restored.verifies_against(gatekeeper));
        assert_eq!(restored.claim, credential.claim);
    }
}
