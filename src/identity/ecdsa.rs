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

//! ECDSA-P-256 keys. Digest is always SHA-256; signatures are DER-encoded
//! per RFC3278 and may be up to 72 bytes, so callers must track the
//! actual encoded length rather than assume a fixed size.

use p256::ecdsa::signature::{Signer as _, Verifier as _};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::EncodePrivateKey;
use p256::SecretKey;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use std::fmt;

use crate::{Error, Result};

/// An ECDSA-P-256 keypair.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.signing_key.verifying_key())
            .finish()
    }
}

impl KeyPair {
    /// Generate a new ECDSA-P-256 keypair from the system CSPRNG.
    pub fn generate() -> KeyPair {
        KeyPair {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Parse a DER-encoded `ECPrivateKey` structure, as defined in
    /// [RFC5915].
    ///
    /// [RFC5915]: https://tools.ietf.org/html/rfc5915
    pub fn from_der_private(der: &[u8]) -> Result<KeyPair> {
        let mut der_copy = der.to_vec();
        let parsed = SecretKey::from_sec1_der(&der_copy);
        der_copy.zeroize();
        let secret_key = err_at!(InvalidInput, parsed, "ECDSA ECPrivateKey")?;
        Ok(KeyPair {
            signing_key: SigningKey::from(secret_key),
        })
    }

    /// Get the public key of this keypair.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: *self.signing_key.verifying_key(),
        }
    }

    /// Sign a message, producing a DER-encoded `SEQUENCE { r, s }`
    /// signature over its SHA-256 digest.
    pub fn sign(&self, msg: &[u8]) -> Result<Vec<u8>> {
        let sig: Signature = self.signing_key.sign(msg);
        Ok(sig.to_der().as_bytes().to_vec())
    }

    /// DER-encode the private key as a PKCS#8 `OneAsymmetricKey` document.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        let doc = err_at!(CryptoFailure, self.signing_key.to_pkcs8_der(), "ECDSA pkcs8")?;
        Ok(doc.as_bytes().to_vec())
    }
}

/// An ECDSA-P-256 public key.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Verify a DER-encoded ECDSA signature over the SHA-256 digest of
    /// `msg`. `Ok(false)` for a well-formed signature that does not
    /// verify; `Err` only for a malformed DER signature.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<bool> {
        let sig = match Signature::from_der(signature) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };
        Ok(self.verifying_key.verify(msg, &sig).is_ok())
    }

    /// Encode as the raw 64-byte uncompressed point `X‖Y`, with the
    /// leading `0x04` SEC1 tag stripped (see DESIGN.md for the SPKI
    /// alternative encoding used for interop).
    pub fn encode_raw(&self) -> [u8; 64] {
        let point = self.verifying_key.to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }

    /// Decode from the raw 64-byte `X‖Y` form produced by [`encode_raw`].
    ///
    /// [`encode_raw`]: PublicKey::encode_raw
    pub fn decode_raw(bytes: &[u8]) -> Result<PublicKey> {
        if bytes.len() != 64 {
            err_at!(InvalidInput, msg: format!("ECDSA raw public key must be 64 bytes, got {}", bytes.len()))?;
        }
        let mut sec1 = Vec::with_capacity(65);
        sec1.push(0x04);
        sec1.extend_from_slice(bytes);

        let verifying_key = err_at!(InvalidInput, VerifyingKey::from_sec1_bytes(&sec1), "ECDSA public key")?;
        Ok(PublicKey { verifying_key })
    }

    /// DER-encode as a standard X.509 SubjectPublicKeyInfo, the form
    /// upstream libp2p expects on the wire (see DESIGN.md).
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        use p256::pkcs8::EncodePublicKey;
        let doc = err_at!(CryptoFailure, self.verifying_key.to_public_key_der(), "ECDSA SPKI")?;
        Ok(doc.as_bytes().to_vec())
    }

    /// Encode as SPKI DER rather than raw `X‖Y`. Upstream libp2p expects
    /// `PublicKey.data` in this form; `encode_raw`/`decode_raw` stay the
    /// default pair for this crate's own wire format, and this pair
    /// exists for callers that need to interoperate with peers that
    /// follow the upstream convention instead.
    pub fn encode_spki_compat(&self) -> Result<Vec<u8>> {
        self.to_spki_der()
    }

    /// Decode a public key from its SPKI DER form, the counterpart to
    /// [`encode_spki_compat`].
    ///
    /// [`encode_spki_compat`]: PublicKey::encode_spki_compat
    pub fn decode_spki_compat(der: &[u8]) -> Result<PublicKey> {
        use p256::pkcs8::DecodePublicKey;
        let verifying_key = err_at!(InvalidInput, VerifyingKey::from_public_key_der(der), "ECDSA SPKI decode")?;
        Ok(PublicKey { verifying_key })
    }
}

#[cfg(test)]
#[path = "ecdsa_test.rs"]
mod ecdsa_test;
