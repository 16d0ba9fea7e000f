use hex_literal::hex;

use super::*;

// A known-good Ed25519 PublicKey protobuf message.
const ED25519_PROTO: [u8; 36] =
    hex!("080112203FE927B823DD7DD796FF052E31D0A6E736CAF05764E5ECC2AB85888F307C06179");

#[test]
fn decode_known_ed25519_vector() {
    let proto = PubKeyProto::decode(&ED25519_PROTO).unwrap();
    assert_eq!(proto.key_type, KeyType::Ed25519);
    assert_eq!(proto.data, ED25519_PROTO[4..].to_vec());
}

#[test]
fn encode_matches_known_vector() {
    let proto = PubKeyProto::new(KeyType::Ed25519, ED25519_PROTO[4..].to_vec());
    assert_eq!(proto.encode(), ED25519_PROTO.to_vec());
}

#[test]
fn accepts_fields_in_either_order() {
    let proto = PubKeyProto::new(KeyType::Ed25519, vec![1, 2, 3, 4]);
    let mut swapped = Vec::new();
    // field 2 first, then field 1 -- same two fields, different order.
    swapped.push(0x12);
    swapped.push(4);
    swapped.extend_from_slice(&[1, 2, 3, 4]);
    swapped.push(0x08);
    swapped.push(KeyType::Ed25519 as u8);

    let decoded = PubKeyProto::decode(&swapped).unwrap();
    assert_eq!(decoded, proto);
}

#[test]
fn rejects_unknown_field_tag() {
    let mut buf = ED25519_PROTO.to_vec();
    buf.push(0x18); // field 3, varint
    buf.push(0x01);
    assert!(PubKeyProto::decode(&buf).is_err());
}

#[test]
fn rejects_missing_field() {
    assert!(PubKeyProto::decode(&[0x08, 0x01]).is_err());
}

#[test]
fn rejects_truncated_varint() {
    assert!(PubKeyProto::decode(&[0x08, 0xff]).is_err());
}
