use super::*;

#[test]
fn sign_verify_round_trip() {
    let kp = KeyPair::generate();
    let pk = kp.to_public_key();
    let msg = b"a message worth signing";

    let sig = kp.sign(msg);
    assert!(pk.verify(msg, &sig));
}

#[test]
fn tampered_message_fails() {
    let kp = KeyPair::generate();
    let pk = kp.to_public_key();
    let sig = kp.sign(b"original");
    assert!(!pk.verify(b"tampered", &sig));
}

#[test]
fn tampered_signature_fails() {
    let kp = KeyPair::generate();
    let pk = kp.to_public_key();
    let msg = b"a message";
    let mut sig = kp.sign(msg);
    sig[0] ^= 0xff;
    assert!(!pk.verify(msg, &sig));
}

#[test]
fn public_key_round_trips_through_raw_bytes() {
    let kp = KeyPair::generate();
    let pk = kp.to_public_key();
    let decoded = PublicKey::decode(&pk.encode()).unwrap();
    assert_eq!(pk, decoded);
}

#[test]
fn private_key_round_trips() {
    let kp = KeyPair::generate();
    let bytes = kp.raw_private();
    let kp2 = KeyPair::from_raw_private(&bytes).unwrap();
    assert_eq!(kp.to_public_key(), kp2.to_public_key());
}

#[test]
fn rejects_wrong_length_public_key() {
    assert!(PublicKey::decode(&[0u8; 31]).is_err());
}

#[test]
fn pkcs8_der_is_nonempty_and_stable() {
    let kp = KeyPair::generate();
    let der1 = kp.to_pkcs8_der().unwrap();
    let der2 = kp.to_pkcs8_der().unwrap();
    assert_eq!(der1, der2);
    assert!(!der1.is_empty());
}
