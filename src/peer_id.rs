//! Module implements Peer ID for libp2p network. _Refer [peer-id] spec
//! for details.
//!
//! [peer-id]: https://github.com/libp2p/specs/blob/master/peer-ids/peer-ids.md

use std::{fmt, hash};

use crate::{
    identity::{KeyType, PublicKey},
    multibase, multicodec,
    multicodec::Multicodec,
    multihash::Multihash,
    Error, Result,
};

/// Unique identifier of a peer in the network, derived by hashing the
/// protobuf-encoded public key with multihash.
///
/// Unlike the inline-length heuristic some implementations use, this
/// crate follows the key-type rule directly: Ed25519, ECDSA, and
/// Secp256k1 public keys are always carried verbatim under the
/// `identity` multihash; RSA public keys are always hashed with
/// SHA2-256, since RSA keys routinely exceed any inline-size budget.
#[derive(Clone, Eq)]
pub struct PeerId {
    mh: Multihash,
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeerId").field(&self.to_string()).finish()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = {
            let mut data = match Multicodec::from_code(multicodec::CID_V1) {
                Ok(codec) => codec.encode().unwrap_or_default(),
                Err(_) => return Err(fmt::Error),
            };
            let key_codec = match Multicodec::from_code(multicodec::LIBP2P_KEY) {
                Ok(codec) => codec.encode().unwrap_or_default(),
                Err(_) => return Err(fmt::Error),
            };
            data.extend_from_slice(&key_codec);
            let mh = match self.mh.encode() {
                Ok(mh) => mh,
                Err(_) => return Err(fmt::Error),
            };
            data.extend_from_slice(&mh);
            data
        };
        f.write_str(&multibase::encode_base32(&data))
    }
}

impl hash::Hash for PeerId {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        hash::Hash::hash(&self.mh.encode().unwrap_or_default(), state)
    }
}

impl PartialEq<PeerId> for PeerId {
    fn eq(&self, other: &PeerId) -> bool {
        self.mh == other.mh
    }
}

impl From<Multihash> for PeerId {
    fn from(mh: Multihash) -> Self {
        PeerId { mh }
    }
}

impl From<PeerId> for Multihash {
    fn from(peer_id: PeerId) -> Self {
        peer_id.mh
    }
}

impl PeerId {
    /// Build a `PeerId` from a public key, per the key-type rule above.
    pub fn from_public_key(key: PublicKey) -> Result<PeerId> {
        let key_type = key.key_type();
        let enc_buf = key.into_protobuf_encoding()?;

        let codec: Multicodec = match key_type {
            KeyType::Ed25519 | KeyType::Ecdsa | KeyType::Secp256k1 => multicodec::IDENTITY.into(),
            KeyType::Rsa => multicodec::SHA2_256.into(),
        };

        let mh = Multihash::new(codec, &enc_buf)?;
        Ok(PeerId { mh })
    }

    /// Decode a human-readable PeerId, accepting either the legacy
    /// base58btc form (`Qm…`) or the modern multibase CIDv1 form
    /// (`b…`).
    pub fn from_text(text: &str) -> Result<PeerId> {
        let peer_id = match text.chars().next() {
            Some('Q') | Some('1') => {
                let bytes = multibase::decode_base58btc(text)?;
                let (mh, _) = Multihash::decode(&bytes)?;
                PeerId { mh }
            }
            Some('b') => {
                let bytes = multibase::decode_base32(text)?;

                let (codec, bytes) = Multicodec::decode(&bytes)?;
                if codec.to_code() != multicodec::CID_V1 {
                    err_at!(InvalidInput, msg: format!("expected CIDv1, got {}", codec))?;
                }

                let (codec, bytes) = Multicodec::decode(bytes)?;
                if codec.to_code() != multicodec::LIBP2P_KEY {
                    err_at!(InvalidInput, msg: format!("expected libp2p-key codec, got {}", codec))?;
                }

                let (mh, _) = Multihash::decode(bytes)?;
                PeerId { mh }
            }
            Some(ch) => err_at!(InvalidInput, msg: format!("not a multibase PeerId: {:?}", ch))?,
            None => err_at!(InvalidInput, msg: "empty PeerId string")?,
        };

        Ok(peer_id)
    }

    /// Render the legacy base58btc form (no CID wrapper, no multibase
    /// prefix): `base58btc(multihash)`.
    pub fn to_legacy_string(&self) -> Result<String> {
        Ok(multibase::encode_base58btc(&self.mh.encode()?))
    }

    /// Encode PeerId into multihash binary form.
    ///
    /// **NOTE:** this byte representation is not necessarily consistent
    /// with equality of peer IDs: two peer IDs may be considered equal
    /// while having a different byte representation.
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.mh.encode()
    }

    /// Decode a PeerId from multihash binary form.
    pub fn decode(buf: &[u8]) -> Result<(PeerId, &[u8])> {
        let (mh, rem) = Multihash::decode(buf)?;
        Ok((PeerId { mh }, rem))
    }

    /// Check whether `public_key` matches this PeerId.
    pub fn is_public_key(&self, public_key: &PublicKey) -> Result<bool> {
        let other = PeerId::from_public_key(public_key.clone())?;
        Ok(self.mh == other.mh)
    }

    /// A condensed version of [`PeerId::to_string`].
    pub fn to_short_string(&self) -> String {
        let s = self.to_string();
        let chars: Vec<char> = s.chars().collect();

        if chars.len() <= 10 {
            chars.into_iter().collect()
        } else {
            let mut short = chars[..2].to_vec();
            short.push('*');
            short.extend_from_slice(&chars[(chars.len() - 6)..]);
            short.into_iter().collect()
        }
    }

    /// When a PeerId was built from the `identity` multihash, the public
    /// key can be recovered verbatim from the PeerId itself.
    pub fn to_public_key(&self) -> Result<Option<PublicKey>> {
        let (codec, digest) = self.mh.clone().unwrap()?;
        let public_key = match codec.to_code() {
            multicodec::IDENTITY => Some(PublicKey::from_protobuf_encoding(&digest)?),
            _ => None,
        };

        Ok(public_key)
    }
}

#[cfg(test)]
#[path = "peer_id_test.rs"]
mod peer_id_test;
