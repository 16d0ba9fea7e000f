//! Hand-rolled codec for the libp2p public-key protobuf message.
//!
//! Upstream libp2p defines this with a `.proto` file compiled by
//! `prost`; this crate only ever needs to encode/decode the one
//! `PublicKey { type, data }` message, so the wire format is written
//! out directly against the field tags instead of pulling in a full
//! protobuf runtime.
//!
//! ```text
//! message PublicKey {
//!     required KeyType Type = 1;
//!     required bytes Data = 2;
//! }
//! enum KeyType { RSA = 0; Ed25519 = 1; Secp256k1 = 2; ECDSA = 3; }
//! ```

use crate::{identity::KeyType, varint, Error, Result};

const FIELD_TYPE: u64 = 1;
const FIELD_DATA: u64 = 2;

/// The decoded form of the `PublicKey` protobuf message: a key type tag
/// plus its raw key bytes, before any curve-specific parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PubKeyProto {
    pub key_type: KeyType,
    pub data: Vec<u8>,
}

impl PubKeyProto {
    pub fn new(key_type: KeyType, data: Vec<u8>) -> PubKeyProto {
        PubKeyProto { key_type, data }
    }

    /// Encode as `0x08 <type> 0x12 <len> <data>`.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + self.data.len());

        varint::encode_u64(varint::encode_tag(FIELD_TYPE, varint::WIRE_VARINT), &mut buf);
        varint::encode_u64(self.key_type as u64, &mut buf);

        varint::encode_u64(
            varint::encode_tag(FIELD_DATA, varint::WIRE_LENGTH_DELIMITED),
            &mut buf,
        );
        varint::encode_u64(self.data.len() as u64, &mut buf);
        buf.extend_from_slice(&self.data);

        buf
    }

    /// Decode a `PublicKey` message. Accepts the two fields in either
    /// order, as the wire format allows, but rejects any other tag and
    /// requires both fields to be present.
    pub fn decode(mut buf: &[u8]) -> Result<PubKeyProto> {
        let mut key_type: Option<KeyType> = None;
        let mut data: Option<Vec<u8>> = None;

        while !buf.is_empty() {
            let (tag, rest) = varint::decode_u64(buf)?;
            let (field_num, wire_type) = varint::decode_tag(tag);

            match (field_num, wire_type) {
                (FIELD_TYPE, varint::WIRE_VARINT) => {
                    let (v, rest) = varint::decode_u64(rest)?;
                    key_type = Some(KeyType::from_i32(v as i32)?);
                    buf = rest;
                }
                (FIELD_DATA, varint::WIRE_LENGTH_DELIMITED) => {
                    let (n, rest) = varint::decode_u64(rest)?;
                    let n = n as usize;
                    if rest.len() < n {
                        err_at!(InvalidInput, msg: "PublicKey.data truncated")?;
                    }
                    let (bytes, rest) = rest.split_at(n);
                    data = Some(bytes.to_vec());
                    buf = rest;
                }
                (field_num, wire_type) => {
                    err_at!(
                        InvalidInput,
                        msg: format!("unknown field tag {}:{}", field_num, wire_type)
                    )?;
                }
            }
        }

        match (key_type, data) {
            (Some(key_type), Some(data)) => Ok(PubKeyProto { key_type, data }),
            (None, _) => err_at!(InvalidInput, msg: "PublicKey missing field 1 (type)"),
            (_, None) => err_at!(InvalidInput, msg: "PublicKey missing field 2 (data)"),
        }
    }
}

#[cfg(test)]
#[path = "pb_test.rs"]
mod pb_test;
