//! The libp2p-TLS certificate: a self-signed X.509 leaf carrying a
//! signed proof that binds an ephemeral TLS certificate key to a node's
//! long-term host identity. See [libp2p-tls] for the upstream spec this
//! module implements.
//!
//! [libp2p-tls]: https://github.com/libp2p/specs/blob/master/tls/tls.md

pub mod builder;
pub mod extension;
pub mod verifier;

pub use builder::make_cert;
pub use verifier::{verify_cert, VerifyPolicy};

#[cfg(test)]
pub(crate) use builder::make_cert_with_criticality;

/// Domain-separation prefix prepended to the cert key's SPKI before the
/// host key signs it, per the libp2p-tls certificate extension.
pub(crate) const LIBP2P_SIGNING_PREFIX: &[u8] = b"libp2p-tls-handshake:";

/// OID of the libp2p X.509 extension carrying the signed proof.
pub(crate) const LIBP2P_EXTENSION_OID: &[u64] = &[1, 3, 6, 1, 4, 1, 53594, 1, 1];

#[cfg(test)]
#[path = "cert_test.rs"]
mod cert_test;
