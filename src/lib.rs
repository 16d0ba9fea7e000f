// Copyright (c) 2020 R Pratap Chakravarthy

//! Package implements the [libp2p-tls] peer-identity layer: keypair
//! primitives, the libp2p public-key protobuf envelope, PeerId encoding,
//! and the self-signed X.509 certificate that carries a signed proof
//! binding an ephemeral TLS certificate key to a long-term host identity.
//!
//! [libp2p-tls]: https://github.com/libp2p/specs/blob/master/tls/tls.md

use std::{error, fmt, result};

#[macro_use]
extern crate data_encoding_macro;

#[macro_use]
mod util;

pub mod cert;
pub mod identity;
pub mod multibase;
pub mod multicodec;
pub mod multihash;
pub mod pb;
pub mod peer_id;
pub mod varint;

pub use identity::{KeyPair, KeyType, PublicKey, RawKey};
pub use peer_id::PeerId;

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;

/// Error variants that can be returned by this package's API.
///
/// Each variant carries a `(location, message)` pair, where `location`
/// is stamped by [`err_at!`] at the call site that raised the error.
pub enum Error {
    /// Malformed input: bad varint, truncated protobuf, wrong multibase
    /// prefix, wrong raw-key length, unknown key type, and so on.
    InvalidInput(String, String),
    /// A `KeyType` is recognized on the wire but sign/verify is not
    /// implemented for it (RSA, Secp256k1).
    Unsupported(String, String),
    /// A cryptographic primitive failed: key generation, signing, or
    /// an underlying library error not attributable to bad input.
    CryptoFailure(String, String),
    /// The outer certificate's self-signature did not verify.
    CertSigInvalid(String, String),
    /// The libp2p extension's signature over the cert key did not verify.
    ExtensionSigInvalid(String, String),
    /// An ASN.1/X.509 structure violated the shape this layer expects:
    /// extension missing, not critical, duplicated, or malformed.
    StructureViolation(String, String),
    /// A caller-supplied output buffer was too small.
    BufferTooSmall(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            InvalidInput(p, msg) => write!(f, "{} InvalidInput: {}", p, msg),
            Unsupported(p, msg) => write!(f, "{} Unsupported: {}", p, msg),
            CryptoFailure(p, msg) => write!(f, "{} CryptoFailure: {}", p, msg),
            CertSigInvalid(p, msg) => write!(f, "{} CertSigInvalid: {}", p, msg),
            ExtensionSigInvalid(p, msg) => write!(f, "{} ExtensionSigInvalid: {}", p, msg),
            StructureViolation(p, msg) => write!(f, "{} StructureViolation: {}", p, msg),
            BufferTooSmall(p, msg) => write!(f, "{} BufferTooSmall: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Compare two byte slices in constant time, independent of where they
/// first differ. Used for raw-key and signature equality checks that
/// feed into authentication decisions (see DESIGN.md).
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
