//! Verifies a received libp2p-TLS certificate and recovers the
//! authenticated host public key, parsing with `x509-parser` the same
//! way the pack's other production libp2p reimplementation does for
//! this exact purpose.

use log::warn;
use x509_parser::der_parser::oid::Oid;
use x509_parser::prelude::*;

use super::{extension, LIBP2P_EXTENSION_OID, LIBP2P_SIGNING_PREFIX};
use crate::{
    identity::{ecdsa, ed25519, PublicKey},
    Error, Result,
};

/// How strictly [`verify_cert`] enforces the libp2p extension's
/// criticality bit. Strict is the only mode upstream requires; Lenient
/// exists for interop with peers that forget to set it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerifyPolicy {
    Strict,
    Lenient,
}

impl Default for VerifyPolicy {
    fn default() -> VerifyPolicy {
        VerifyPolicy::Strict
    }
}

/// Verify `der` as a self-signed libp2p-TLS certificate and return the
/// authenticated host public key on success.
pub fn verify_cert(der: &[u8], policy: VerifyPolicy) -> Result<PublicKey> {
    let (_, cert) = err_at!(StructureViolation, X509Certificate::from_der(der), "parse certificate")?;

    err_at!(CertSigInvalid, cert.verify_signature(None), "certificate self-signature")?;

    let ext_value = find_libp2p_extension(&cert, policy)?;
    let (host_proto, signature) = extension::decode(ext_value)?;
    let host_key = PublicKey::from_protobuf_encoding(&host_proto)?;

    let spki = cert_pub_spki_der(&cert)?;
    let mut payload = Vec::with_capacity(LIBP2P_SIGNING_PREFIX.len() + spki.len());
    payload.extend_from_slice(LIBP2P_SIGNING_PREFIX);
    payload.extend_from_slice(&spki);

    match host_key.verify(&payload, &signature)? {
        true => Ok(host_key),
        false => err_at!(ExtensionSigInvalid, msg: "libp2p extension signature does not verify"),
    }
}

fn find_libp2p_extension<'a>(cert: &'a X509Certificate, policy: VerifyPolicy) -> Result<&'a [u8]> {
    let oid = match Oid::from(LIBP2P_EXTENSION_OID) {
        Ok(oid) => oid,
        Err(_) => err_at!(StructureViolation, msg: "invalid libp2p extension OID")?,
    };

    let mut found: Option<&[u8]> = None;
    for ext in cert.extensions() {
        if ext.oid != oid {
            continue;
        }
        if found.is_some() {
            err_at!(StructureViolation, msg: "duplicate libp2p extension")?;
        }
        if !ext.critical {
            match policy {
                VerifyPolicy::Strict => {
                    err_at!(StructureViolation, msg: "libp2p extension not marked critical")?;
                }
                VerifyPolicy::Lenient => {
                    warn!(target: "libp2p", "libp2p extension present but not marked critical");
                }
            }
        }
        found = Some(ext.value);
    }

    match found {
        Some(value) => Ok(value),
        None => err_at!(StructureViolation, msg: "libp2p extension not found"),
    }
}

/// Recompute the certificate's own SPKI as canonical DER, by decoding
/// the key material x509-parser recovered and re-encoding it through
/// this crate's own key types. This guarantees the bytes are
/// byte-identical to what `make_cert` signed over, rather than
/// depending on x509-parser preserving the original TLV bytes.
fn cert_pub_spki_der(cert: &X509Certificate) -> Result<Vec<u8>> {
    let spki = cert.public_key();
    let alg_oid = &spki.algorithm.algorithm;
    let key_bytes = spki.subject_public_key.data.as_ref();

    let ed25519_oid = match Oid::from(&[1, 3, 101, 112]) {
        Ok(oid) => oid,
        Err(_) => err_at!(StructureViolation, msg: "invalid Ed25519 algorithm OID")?,
    };
    let ec_public_key_oid = match Oid::from(&[1, 2, 840, 10045, 2, 1]) {
        Ok(oid) => oid,
        Err(_) => err_at!(StructureViolation, msg: "invalid EC public key algorithm OID")?,
    };

    if *alg_oid == ed25519_oid {
        let pk = ed25519::PublicKey::decode(key_bytes)?;
        pk.to_spki_der()
    } else if *alg_oid == ec_public_key_oid {
        if key_bytes.len() != 65 || key_bytes[0] != 0x04 {
            err_at!(StructureViolation, msg: "unexpected EC point encoding in certificate SPKI")?;
        }
        let pk = ecdsa::PublicKey::decode_raw(&key_bytes[1..])?;
        pk.to_spki_der()
    } else {
        err_at!(StructureViolation, msg: "certificate key is neither Ed25519 nor ECDSA-P256")
    }
}
