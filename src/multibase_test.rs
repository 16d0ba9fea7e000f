use hex_literal::hex;

use super::*;

#[test]
fn base32_round_trip() {
    let data = hex!("080112208A88E3DD7409F195FD52DB2D3CBA5D72CA6709BF1D94121BF3748801B40F6F01");
    let text = encode_base32(&data);
    assert!(text.starts_with('b'));
    assert_eq!(decode_base32(&text).unwrap(), data.to_vec());
}

#[test]
fn base32_rejects_wrong_prefix() {
    assert!(decode_base32("zfoobar").is_err());
}

#[test]
fn base32_is_lowercase_no_pad() {
    let text = encode_base32(&[0xff; 5]);
    assert!(text[1..].chars().all(|c| !c.is_ascii_uppercase()));
    assert!(!text.contains('='));
}

#[test]
fn base58btc_round_trip() {
    let data = vec![0u8, 0x24, 0x08, 0x01, 0x12, 0x20];
    let text = encode_base58btc(&data);
    assert_eq!(decode_base58btc(&text).unwrap(), data);
}
