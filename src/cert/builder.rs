//! Builds the self-signed libp2p-TLS certificate, the same way the
//! pack's QUIC transport reference builds its
//! certificate: via `rcgen`'s `CertificateParams` builder, fed a
//! `rcgen::KeyPair` reconstructed from our own key's PKCS#8 encoding so
//! the SPKI rcgen emits is byte-identical to the one we sign over.

use rand::RngCore;
use rcgen::{
    Certificate, CertificateParams, CustomExtension, DistinguishedName, DnType,
    KeyPair as RcgenKeyPair, PKCS_ECDSA_P256_SHA256, PKCS_ED25519,
};
use time::{Duration, OffsetDateTime};

use super::{extension, LIBP2P_EXTENSION_OID, LIBP2P_SIGNING_PREFIX};
use crate::{identity::KeyPair, Error, Result};

/// Build a self-signed X.509 certificate DER: `cert_key` signs the
/// certificate; `host_key` signs the proof binding `cert_key` to the
/// peer's long-term identity.
pub fn make_cert(host_key: &KeyPair, cert_key: &KeyPair) -> Result<Vec<u8>> {
    make_cert_inner(host_key, cert_key, true)
}

/// Same as [`make_cert`], but lets the caller mark the libp2p extension
/// non-critical. Used by tests to exercise [`super::VerifyPolicy::Lenient`]
/// against a certificate real peers would never produce.
#[cfg(test)]
pub(crate) fn make_cert_with_criticality(
    host_key: &KeyPair,
    cert_key: &KeyPair,
    critical: bool,
) -> Result<Vec<u8>> {
    make_cert_inner(host_key, cert_key, critical)
}

fn make_cert_inner(host_key: &KeyPair, cert_key: &KeyPair, critical: bool) -> Result<Vec<u8>> {
    let cert_pub = cert_key.to_public_key();
    let spki = cert_pub.to_spki_der()?;

    let mut payload = Vec::with_capacity(LIBP2P_SIGNING_PREFIX.len() + spki.len());
    payload.extend_from_slice(LIBP2P_SIGNING_PREFIX);
    payload.extend_from_slice(&spki);

    let signature = host_key.sign(&payload)?;
    let host_proto = host_key.to_public_key().into_protobuf_encoding()?;
    let ext_der = extension::encode(&host_proto, &signature);

    let alg: &rcgen::SignatureAlgorithm = match cert_key {
        KeyPair::Ed25519(_) => &PKCS_ED25519,
        KeyPair::Ecdsa(_) => &PKCS_ECDSA_P256_SHA256,
    };

    let pkcs8 = cert_key.to_pkcs8_der()?;
    let rcgen_kp = err_at!(CryptoFailure, RcgenKeyPair::from_der(&pkcs8), "rcgen keypair")?;

    let mut params = CertificateParams::default();
    params.alg = alg;
    params.key_pair = Some(rcgen_kp);

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CountryName, "US");
    dn.push(DnType::OrganizationName, "libp2p");
    dn.push(DnType::CommonName, "libp2p");
    params.distinguished_name = dn;

    let mut serial = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut serial);
    params.serial_number = Some(serial.to_vec());

    let not_before = OffsetDateTime::now_utc();
    params.not_before = not_before;
    params.not_after = not_before + Duration::days(365);

    let mut ext = CustomExtension::from_oid_content(LIBP2P_EXTENSION_OID, ext_der);
    ext.set_criticality(critical);
    params.custom_extensions = vec![ext];

    let cert = err_at!(CryptoFailure, Certificate::from_params(params), "build certificate")?;
    err_at!(CryptoFailure, cert.serialize_der(), "serialize certificate")
}
