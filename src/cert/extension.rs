//! ASN.1 DER codec for the libp2p extension value: a `SEQUENCE` of
//! exactly two `OCTET STRING`s, `(hostPubKeyProto, signature)`.
//!
//! Historically the upstream QUIC transport (pre-stabilization) wrapped
//! these two elements in `BIT STRING`s rather than `OCTET STRING`s; the
//! stabilized libp2p-tls extension this module implements
//! (OID 1.3.6.1.4.1.53594.1.1) uses `OCTET STRING` instead.

use crate::{Error, Result};

/// Encode `(host_pub_proto, signature)` as the libp2p extension value.
pub fn encode(host_pub_proto: &[u8], signature: &[u8]) -> Vec<u8> {
    yasna::construct_der(|writer| {
        writer.write_sequence(|writer| {
            writer.next().write_bytes(host_pub_proto);
            writer.next().write_bytes(signature);
        })
    })
}

/// Decode the libp2p extension value into `(host_pub_proto, signature)`.
pub fn decode(der: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let result = yasna::parse_der(der, |reader| {
        reader.read_sequence(|reader| {
            let host_pub_proto = reader.next().read_bytes()?;
            let signature = reader.next().read_bytes()?;
            Ok((host_pub_proto, signature))
        })
    });

    err_at!(StructureViolation, result, "libp2p extension ASN.1")
}

#[cfg(test)]
#[path = "extension_test.rs"]
mod extension_test;
