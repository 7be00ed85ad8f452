//! End-to-end minting protocol tests: credential issuance on the
//! gatekeeper side, verification and state transitions on the registry
//! side.

use mintgate_core::{encode_token_id, Address, MintClaim, MintError, ResourceId, TokenId};
use mintgate_credential::CredentialBuilder;
use mintgate_crypto::{GatekeeperKeyPair, RecoverableSignature};
use mintgate_registry::{MintingRegistry, RegistryError};

const DATE_CREATED: &str = "2020-09-15";
const DESCRIPTION: &str = "NFT Royalty Standard";
const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

fn author(tag: u8) -> Address {
    Address::from_bytes([tag; 20])
}

fn setup() -> (CredentialBuilder, MintingRegistry) {
    let builder = CredentialBuilder::new(GatekeeperKeyPair::generate());
    let registry = MintingRegistry::new(builder.gatekeeper_address());
    (builder, registry)
}

fn claim(resource: u64, allowed: u8, who: Address) -> MintClaim {
    MintClaim::new(ResourceId(resource), allowed, who, DATE_CREATED, DESCRIPTION)
}

#[test]
fn valid_credential_mints_first_token() {
    let (builder, mut registry) = setup();
    let a = author(1);
    let credential = builder.issue(claim(1559, 2, a)).unwrap();

    assert!(registry.verify_mint(&credential.claim, &credential.signature));

    // Royalty query is safe before any mint: zero recipient, zero amount.
    let first_token = encode_token_id(ResourceId(1559), 1).unwrap();
    let blank = registry.royalty_info(first_token, ONE_ETHER).unwrap();
    assert_eq!(blank.recipient, Address::ZERO);
    assert_eq!(blank.amount, 0);

    let token = registry
        .authenticated_mint(a, &credential.claim, &credential.signature)
        .unwrap();
    assert_eq!(token.token_id, first_token);
    assert_eq!(token.token_id, TokenId(100_155_900_001));
    assert_eq!(token.sequence, 1);
    assert_eq!(token.owner, a);
    assert_eq!(registry.owner_of(first_token).unwrap(), a);

    // 2.5% of one ether.
    let royalty = registry.royalty_info(first_token, ONE_ETHER).unwrap();
    assert_eq!(royalty.recipient, a);
    assert_eq!(royalty.amount, 25_000_000_000_000_000);
}

#[test]
fn garbage_signature_is_not_authorized() {
    let (_, mut registry) = setup();
    let a = author(1);
    let c = claim(1559, 2, a);
    let garbage = RecoverableSignature::from_bytes([0x61; 65]);
    assert_eq!(
        registry.authenticated_mint(a, &c, &garbage),
        Err(MintError::NotAuthorized)
    );
    assert!(!registry.verify_mint(&c, &garbage));
}

#[test]
fn tampered_signature_is_not_authorized_never_a_crash() {
    let (builder, mut registry) = setup();
    let a = author(1);
    let credential = builder.issue(claim(1559, 2, a)).unwrap();

    for position in 0..65 {
        let mut bytes = *credential.signature.as_bytes();
        bytes[position] ^= 0x01;
        let tampered = RecoverableSignature::from_bytes(bytes);
        assert_eq!(
            registry.authenticated_mint(a, &credential.claim, &tampered),
            Err(MintError::NotAuthorized),
            "tampered byte {position}"
        );
    }
    // The registry saw no valid mint.
    assert_eq!(registry.mint_count(ResourceId(1559)), 0);
}

#[test]
fn author_cannot_mint_twice_for_same_resource() {
    let (builder, mut registry) = setup();
    let a = author(1);
    let credential = builder.issue(claim(1559, 2, a)).unwrap();

    registry
        .authenticated_mint(a, &credential.claim, &credential.signature)
        .unwrap();
    assert_eq!(
        registry.authenticated_mint(a, &credential.claim, &credential.signature),
        Err(MintError::AlreadyMinted)
    );
    assert_eq!(registry.mint_count(ResourceId(1559)), 1);
}

#[test]
fn sender_cannot_mint_for_someone_else() {
    let (builder, mut registry) = setup();
    let a = author(1);
    let credential = builder.issue(claim(1559, 2, a)).unwrap();

    assert_eq!(
        registry.authenticated_mint(author(2), &credential.claim, &credential.signature),
        Err(MintError::WrongSender)
    );
}

#[test]
fn author_can_mint_for_different_resources() {
    let (builder, mut registry) = setup();
    let a = author(1);

    for (resource, allowed) in [(1559u64, 2u8), (721, 2)] {
        let credential = builder.issue(claim(resource, allowed, a)).unwrap();
        registry
            .authenticated_mint(a, &credential.claim, &credential.signature)
            .unwrap();
    }
    assert_eq!(registry.mint_count(ResourceId(1559)), 1);
    assert_eq!(registry.mint_count(ResourceId(721)), 1);

    // Also with an allowance of one per resource.
    let b = author(2);
    for resource in [1559u64, 721] {
        let credential = builder.issue(claim(resource, 2, b)).unwrap();
        registry
            .authenticated_mint(b, &credential.claim, &credential.signature)
            .unwrap();
    }
}

#[test]
fn quota_exhaustion_rejects_third_author() {
    let (builder, mut registry) = setup();

    for tag in 1..=2 {
        let who = author(tag);
        let credential = builder.issue(claim(1559, 2, who)).unwrap();
        registry
            .authenticated_mint(who, &credential.claim, &credential.signature)
            .unwrap();
    }

    let third = author(3);
    let credential = builder.issue(claim(1559, 2, third)).unwrap();
    assert_eq!(
        registry.authenticated_mint(third, &credential.claim, &credential.signature),
        Err(MintError::TooManyMints)
    );
    // The credential itself is still well-signed: the probe checks only
    // signature validity, not state.
    assert!(registry.verify_mint(&credential.claim, &credential.signature));
}

#[test]
fn second_author_may_omit_metadata() {
    let (builder, mut registry) = setup();
    let first = author(1);
    let second = author(2);

    let credential = builder.issue(claim(2981, 2, first)).unwrap();
    registry
        .authenticated_mint(first, &credential.claim, &credential.signature)
        .unwrap();

    let bare = builder
        .issue(MintClaim::new(ResourceId(2981), 2, second, "", ""))
        .unwrap();
    let token = registry
        .authenticated_mint(second, &bare.claim, &bare.signature)
        .unwrap();
    assert_eq!(token.token_id, encode_token_id(ResourceId(2981), 2).unwrap());

    let first_token = encode_token_id(ResourceId(2981), 1).unwrap();
    assert_eq!(registry.owner_of(first_token).unwrap(), first);
    assert_eq!(registry.owner_of(token.token_id).unwrap(), second);

    // First-mint metadata and royalty recipient remain the originals.
    let record = registry.resource(ResourceId(2981)).unwrap();
    let metadata = record.first_mint.as_ref().unwrap();
    assert_eq!(metadata.date_created, DATE_CREATED);
    assert_eq!(metadata.description, DESCRIPTION);
    assert_eq!(record.royalty_recipient, Some(first));

    let royalty = registry.royalty_info(token.token_id, ONE_ETHER).unwrap();
    assert_eq!(royalty.recipient, first);
}

#[test]
fn later_credential_can_raise_the_ceiling() {
    // Quota is per-credential: a fresh gatekeeper-signed allowance is
    // enforced as presented, not remembered per resource.
    let (builder, mut registry) = setup();

    let a = author(1);
    let credential = builder.issue(claim(7, 1, a)).unwrap();
    registry
        .authenticated_mint(a, &credential.claim, &credential.signature)
        .unwrap();

    let b = author(2);
    let low = builder.issue(claim(7, 1, b)).unwrap();
    assert_eq!(
        registry.authenticated_mint(b, &low.claim, &low.signature),
        Err(MintError::TooManyMints)
    );

    let raised = builder.issue(claim(7, 2, b)).unwrap();
    registry
        .authenticated_mint(b, &raised.claim, &raised.signature)
        .unwrap();
    assert_eq!(registry.mint_count(ResourceId(7)), 2);
}

#[test]
fn failed_mint_leaves_no_partial_state() {
    let (builder, mut registry) = setup();
    let a = author(1);
    let credential = builder.issue(claim(1559, 1, a)).unwrap();
    registry
        .authenticated_mint(a, &credential.claim, &credential.signature)
        .unwrap();

    let b = author(2);
    let rejected = builder.issue(claim(1559, 1, b)).unwrap();
    assert_eq!(
        registry.authenticated_mint(b, &rejected.claim, &rejected.signature),
        Err(MintError::TooManyMints)
    );

    let record = registry.resource(ResourceId(1559)).unwrap();
    assert_eq!(record.mint_count, 1);
    assert!(!record.has_minted(b));
    assert_eq!(
        registry.owner_of(encode_token_id(ResourceId(1559), 2).unwrap()),
        Err(RegistryError::UnknownToken(
            encode_token_id(ResourceId(1559), 2).unwrap()
        ))
    );
}

#[test]
fn credential_from_wrong_gatekeeper_is_rejected() {
    let (_, mut registry) = setup();
    let impostor = CredentialBuilder::new(GatekeeperKeyPair::generate());
    let a = author(1);
    let credential = impostor.issue(claim(1559, 2, a)).unwrap();
    assert_eq!(
        registry.authenticated_mint(a, &credential.claim, &credential.signature),
        Err(MintError::NotAuthorized)
    );
}
