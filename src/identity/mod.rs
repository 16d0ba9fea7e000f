// Copyright 2019 Parity Technologies (UK) Ltd.
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS
// OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! A node's network identity: its key is its identity.

pub mod ecdsa;
pub mod ed25519;

use crate::{ct_eq, pb::PubKeyProto, Error, Result};

/// Key-type tag, wire-compatible with the libp2p `KeyType` protobuf enum.
/// `Rsa` and `Secp256k1` are recognized on the wire (decode-only); this
/// crate does not generate, sign, or verify with those two.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyType {
    Rsa = 0,
    Ed25519 = 1,
    Secp256k1 = 2,
    Ecdsa = 3,
}

impl KeyType {
    pub fn from_i32(v: i32) -> Result<KeyType> {
        match v {
            0 => Ok(KeyType::Rsa),
            1 => Ok(KeyType::Ed25519),
            2 => Ok(KeyType::Secp256k1),
            3 => Ok(KeyType::Ecdsa),
            v => err_at!(InvalidInput, msg: format!("unknown key type {}", v)),
        }
    }
}

/// Raw public-key bytes tagged with their `KeyType`, as carried inside
/// a `PublicKey` protobuf message (see [`crate::pb::PubKeyProto`]) before
/// any curve-specific parsing.
///
/// For Ed25519 this is the 32-byte public key; for ECDSA it is the
/// 64-byte uncompressed `X‖Y` point (no `0x04` prefix, see DESIGN.md for
/// the SPKI-compat alternative); for RSA it is the DER-encoded SPKI of
/// the RSA key; for Secp256k1 it is the SEC1-compressed point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawKey {
    pub key_type: KeyType,
    pub bytes: Vec<u8>,
}

impl RawKey {
    pub fn new(key_type: KeyType, bytes: Vec<u8>) -> RawKey {
        RawKey { key_type, bytes }
    }
}

/// Identity keypair of a node: owns private-key material for one of the
/// two curves this layer implements end to end.
pub enum KeyPair {
    Ed25519(ed25519::KeyPair),
    Ecdsa(ecdsa::KeyPair),
}

impl KeyPair {
    /// Generate a fresh Ed25519 keypair.
    pub fn generate_ed25519() -> Result<KeyPair> {
        Ok(KeyPair::Ed25519(ed25519::KeyPair::generate()))
    }

    /// Generate a fresh ECDSA-P-256 keypair.
    pub fn generate_ecdsa() -> Result<KeyPair> {
        Ok(KeyPair::Ecdsa(ecdsa::KeyPair::generate()))
    }

    /// The public half of this keypair.
    pub fn to_public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(kp) => PublicKey::Ed25519(kp.to_public_key()),
            KeyPair::Ecdsa(kp) => PublicKey::Ecdsa(kp.to_public_key()),
        }
    }

    /// Sign `msg` with the private key of this keypair.
    pub fn sign(&self, msg: &[u8]) -> Result<Vec<u8>> {
        match self {
            KeyPair::Ed25519(kp) => Ok(kp.sign(msg).to_vec()),
            KeyPair::Ecdsa(kp) => kp.sign(msg),
        }
    }

    /// DER-encode the private key as a PKCS#8 `OneAsymmetricKey`
    /// document, the form the certificate builder hands to `rcgen`.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        match self {
            KeyPair::Ed25519(kp) => kp.to_pkcs8_der(),
            KeyPair::Ecdsa(kp) => kp.to_pkcs8_der(),
        }
    }
}

/// The public key of a node's identity keypair, or of a peer's identity
/// as recovered from a certificate or a protobuf message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PublicKey {
    Ed25519(ed25519::PublicKey),
    Ecdsa(ecdsa::PublicKey),
    Rsa(RawKey),
    Secp256k1(RawKey),
}

impl PublicKey {
    /// The key-type tag of this public key.
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Ed25519(_) => KeyType::Ed25519,
            PublicKey::Ecdsa(_) => KeyType::Ecdsa,
            PublicKey::Rsa(_) => KeyType::Rsa,
            PublicKey::Secp256k1(_) => KeyType::Secp256k1,
        }
    }

    /// Verify a signature for `msg` using this public key. `Ok(false)`
    /// means the signature is well-formed but does not verify; `Err`
    /// means the key type cannot sign/verify at all in this build.
    pub fn verify(&self, msg: &[u8], sig: &[u8]) -> Result<bool> {
        match self {
            PublicKey::Ed25519(pk) => Ok(pk.verify(msg, sig)),
            PublicKey::Ecdsa(pk) => pk.verify(msg, sig),
            PublicKey::Rsa(_) => {
                err_at!(Unsupported, msg: "RSA sign/verify is not implemented")
            }
            PublicKey::Secp256k1(_) => {
                err_at!(Unsupported, msg: "Secp256k1 sign/verify is not implemented")
            }
        }
    }

    /// Compare raw key bytes in constant time; differing key types are
    /// never equal regardless of byte content.
    pub fn ct_equal(&self, other: &PublicKey) -> bool {
        if self.key_type() as i32 != other.key_type() as i32 {
            return false;
        }
        ct_eq(&self.raw_bytes(), &other.raw_bytes())
    }

    fn raw_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(pk) => pk.encode().to_vec(),
            PublicKey::Ecdsa(pk) => pk.encode_raw().to_vec(),
            PublicKey::Rsa(raw) => raw.bytes.clone(),
            PublicKey::Secp256k1(raw) => raw.bytes.clone(),
        }
    }

    /// DER-encode this public key as a standard X.509
    /// SubjectPublicKeyInfo. Used by the certificate layer to hash/sign
    /// over the cert key's SPKI (see [`crate::cert`]).
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        match self {
            PublicKey::Ed25519(pk) => pk.to_spki_der(),
            PublicKey::Ecdsa(pk) => pk.to_spki_der(),
            PublicKey::Rsa(_) => err_at!(Unsupported, msg: "RSA SPKI is not implemented"),
            PublicKey::Secp256k1(_) => err_at!(Unsupported, msg: "Secp256k1 SPKI is not implemented"),
        }
    }

    /// Encode into the libp2p `PublicKey` protobuf message.
    pub fn into_protobuf_encoding(self) -> Result<Vec<u8>> {
        let proto = match self {
            PublicKey::Ed25519(key) => PubKeyProto::new(KeyType::Ed25519, key.encode().to_vec()),
            PublicKey::Ecdsa(key) => PubKeyProto::new(KeyType::Ecdsa, key.encode_raw().to_vec()),
            PublicKey::Rsa(raw) => PubKeyProto::new(KeyType::Rsa, raw.bytes),
            PublicKey::Secp256k1(raw) => PubKeyProto::new(KeyType::Secp256k1, raw.bytes),
        };
        Ok(proto.encode())
    }

    /// Decode a `PublicKey` protobuf message, as read from storage or
    /// received from another peer.
    pub fn from_protobuf_encoding(bytes: &[u8]) -> Result<PublicKey> {
        let proto = PubKeyProto::decode(bytes)?;
        let public_key = match proto.key_type {
            KeyType::Ed25519 => PublicKey::Ed25519(ed25519::PublicKey::decode(&proto.data)?),
            KeyType::Ecdsa => PublicKey::Ecdsa(ecdsa::PublicKey::decode_raw(&proto.data)?),
            KeyType::Rsa => PublicKey::Rsa(RawKey::new(KeyType::Rsa, proto.data)),
            KeyType::Secp256k1 => PublicKey::Secp256k1(RawKey::new(KeyType::Secp256k1, proto.data)),
        };
        Ok(public_key)
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;
