use super::*;

#[test]
fn round_trip() {
    let host = vec![1, 2, 3, 4];
    let sig = vec![5, 6, 7, 8, 9];
    let der = encode(&host, &sig);
    let (got_host, got_sig) = decode(&der).unwrap();
    assert_eq!(host, got_host);
    assert_eq!(sig, got_sig);
}

#[test]
fn rejects_truncated_der() {
    let der = encode(&[1, 2, 3], &[4, 5, 6]);
    assert!(decode(&der[..der.len() - 2]).is_err());
}
