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

//! Ed25519 keys.

use ed25519_dalek::pkcs8::EncodePrivateKey;
use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use zeroize::Zeroize;

use std::fmt;

use crate::{Error, Result};

/// An Ed25519 keypair.
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
    /// Generate a new Ed25519 keypair from the system CSPRNG.
    pub fn generate() -> KeyPair {
        let signing_key = SigningKey::generate(&mut OsRng);
        KeyPair { signing_key }
    }

    /// Reconstruct a keypair from its 32-byte secret scalar.
    pub fn from_raw_private(bytes: &[u8]) -> Result<KeyPair> {
        let mut arr: [u8; 32] = match bytes.try_into() {
            Ok(arr) => arr,
            Err(_) => err_at!(InvalidInput, msg: format!("Ed25519 private key must be 32 bytes, got {}", bytes.len()))?,
        };
        let signing_key = SigningKey::from_bytes(&arr);
        arr.zeroize();
        Ok(KeyPair { signing_key })
    }

    /// Get the public key of this keypair.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// The 32-byte secret scalar.
    pub fn raw_private(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Sign a message with the private key of this keypair. Ed25519 is
    /// PureEdDSA: no digest is applied to `msg` before signing.
    pub fn sign(&self, msg: &[u8]) -> [u8; 64] {
        self.signing_key.sign(msg).to_bytes()
    }

    /// DER-encode the private key as a PKCS#8 `OneAsymmetricKey` document.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        let doc = err_at!(CryptoFailure, self.signing_key.to_pkcs8_der(), "Ed25519 pkcs8")?;
        Ok(doc.as_bytes().to_vec())
    }
}

impl PublicKey {
    /// DER-encode as a standard X.509 SubjectPublicKeyInfo.
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        use ed25519_dalek::pkcs8::EncodePublicKey;
        let doc = err_at!(CryptoFailure, self.verifying_key.to_public_key_der(), "Ed25519 SPKI")?;
        Ok(doc.as_bytes().to_vec())
    }
}

/// An Ed25519 public key.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Verify the Ed25519 signature on a message using this public key.
    /// A malformed signature, rather than erroring, simply fails to
    /// verify.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        let sig: [u8; 64] = match signature.try_into() {
            Ok(arr) => arr,
            Err(_) => return false,
        };
        self.verifying_key
            .verify(msg, &Signature::from_bytes(&sig))
            .is_ok()
    }

    /// Encode the public key as its 32-byte compressed form.
    pub fn encode(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Decode a public key from its 32-byte compressed form.
    pub fn decode(k: &[u8]) -> Result<PublicKey> {
        let arr: [u8; 32] = match k.try_into() {
            Ok(arr) => arr,
            Err(_) => err_at!(InvalidInput, msg: format!("Ed25519 public key must be 32 bytes, got {}", k.len()))?,
        };
        let verifying_key = err_at!(InvalidInput, VerifyingKey::from_bytes(&arr), "Ed25519 public key")?;
        Ok(PublicKey { verifying_key })
    }
}

#[cfg(test)]
#[path = "ed25519_test.rs"]
mod ed25519_test;
