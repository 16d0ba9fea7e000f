//! LEB128 varints and the minimal protobuf field codec this crate needs.
//!
//! The raw varint arithmetic is delegated to [`unsigned_varint`]; this
//! module only adds the protobuf field-tag framing for the two-field
//! `PublicKey { key_type, data }` message (see the `pb` module) and the
//! multicodec/CID header bytes used by [`crate::peer_id`].

use unsigned_varint::{decode as uv_decode, encode as uv_encode};

use crate::{Error, Result};

/// Protobuf wire type for a varint-encoded field.
pub const WIRE_VARINT: u64 = 0;
/// Protobuf wire type for a length-delimited field (bytes/string/message).
pub const WIRE_LENGTH_DELIMITED: u64 = 2;

/// Encode a protobuf field tag `(field_num << 3) | wire_type`.
pub fn encode_tag(field_num: u64, wire_type: u64) -> u64 {
    (field_num << 3) | wire_type
}

/// Decode a protobuf field tag into `(field_num, wire_type)`.
pub fn decode_tag(tag: u64) -> (u64, u64) {
    (tag >> 3, tag & 0x7)
}

/// Encode `val` as an unsigned LEB128 varint, appending it to `buf`.
pub fn encode_u64(val: u64, buf: &mut Vec<u8>) {
    let mut scratch = [0u8; 10];
    buf.extend_from_slice(uv_encode::u64(val, &mut scratch));
}

/// Decode an unsigned LEB128 varint from the front of `data`, returning
/// the value and the remaining bytes.
pub fn decode_u64(data: &[u8]) -> Result<(u64, &[u8])> {
    err_at!(InvalidInput, uv_decode::u64(data), "malformed varint")
}
