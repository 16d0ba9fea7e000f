use super::*;

#[test]
fn ed25519_keypair_dispatch_round_trips() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let pk = kp.to_public_key();
    let msg = b"dispatch through the enum";

    let sig = kp.sign(msg).unwrap();
    assert!(pk.verify(msg, &sig).unwrap());
}

#[test]
fn ecdsa_keypair_dispatch_round_trips() {
    let kp = KeyPair::generate_ecdsa().unwrap();
    let pk = kp.to_public_key();
    let msg = b"dispatch through the enum";

    let sig = kp.sign(msg).unwrap();
    assert!(pk.verify(msg, &sig).unwrap());
}

#[test]
fn public_key_protobuf_round_trip_ed25519() {
    let kp = KeyPair::generate_ed25519().unwrap();
    let pk = kp.to_public_key();
    let encoded = pk.clone().into_protobuf_encoding().unwrap();
    let decoded = PublicKey::from_protobuf_encoding(&encoded).unwrap();
    assert_eq!(pk, decoded);
}

#[test]
fn public_key_protobuf_round_trip_ecdsa() {
    let kp = KeyPair::generate_ecdsa().unwrap();
    let pk = kp.to_public_key();
    let encoded = pk.clone().into_protobuf_encoding().unwrap();
    let decoded = PublicKey::from_protobuf_encoding(&encoded).unwrap();
    assert_eq!(pk, decoded);
}

#[test]
fn rsa_and_secp256k1_decode_but_cannot_verify() {
    let raw = RawKey::new(KeyType::Rsa, vec![1, 2, 3, 4]);
    let pk = PublicKey::Rsa(raw);
    let encoded = pk.clone().into_protobuf_encoding().unwrap();
    let decoded = PublicKey::from_protobuf_encoding(&encoded).unwrap();
    assert_eq!(pk, decoded);
    assert!(decoded.verify(b"x", b"y").is_err());
}

#[test]
fn ct_equal_rejects_cross_type_comparison() {
    let ed = KeyPair::generate_ed25519().unwrap().to_public_key();
    let rsa = PublicKey::Rsa(RawKey::new(KeyType::Rsa, ed.clone().into_protobuf_encoding().unwrap()));
    assert!(!ed.ct_equal(&rsa));
}

#[test]
fn key_type_from_i32_rejects_unknown() {
    assert!(KeyType::from_i32(99).is_err());
}
