use super::*;
use crate::identity::KeyPair;

#[test]
fn ed25519_round_trips_through_modern_string() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let pk = kp.to_public_key();
    let peer_id = PeerId::from_public_key(pk.clone()).unwrap();

    let text = peer_id.to_string();
    assert!(text.starts_with('b'));

    let parsed = PeerId::from_text(&text).unwrap();
    assert_eq!(peer_id, parsed);
    assert!(parsed.is_public_key(&pk).unwrap());
}

#[test]
fn ecdsa_round_trips_through_modern_string() {
    let kp = KeyPair::generate_ecdsa().unwrap();
    let pk = kp.to_public_key();
    let peer_id = PeerId::from_public_key(pk.clone()).unwrap();

    let parsed = PeerId::from_text(&peer_id.to_string()).unwrap();
    assert_eq!(peer_id, parsed);
    assert!(parsed.is_public_key(&pk).unwrap());
}

#[test]
fn legacy_string_round_trips() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let pk = kp.to_public_key();
    let peer_id = PeerId::from_public_key(pk).unwrap();

    let legacy = peer_id.to_legacy_string().unwrap();
    let parsed = PeerId::from_text(&legacy).unwrap();
    assert_eq!(peer_id, parsed);
}

#[test]
fn identity_multihash_recovers_public_key() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let pk = kp.to_public_key();
    let peer_id = PeerId::from_public_key(pk.clone()).unwrap();

    let recovered = peer_id.to_public_key().unwrap();
    assert_eq!(recovered, Some(pk));
}

#[test]
fn rejects_unknown_multibase_prefix() {
    assert!(PeerId::from_text("xnotarealprefix").is_err());
}

#[test]
fn rejects_empty_string() {
    assert!(PeerId::from_text("").is_err());
}

#[test]
fn to_short_string_condenses_long_ids() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let peer_id = PeerId::from_public_key(kp.to_public_key()).unwrap();
    let short = peer_id.to_short_string();
    assert!(short.len() < peer_id.to_string().len());
    assert!(short.contains('*'));
}
