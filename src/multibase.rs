//! Module handles the subset of the [multibase] specification this
//! crate needs: the `'b'` (RFC4648 base32, lowercase, no padding) form
//! used for modern PeerId rendering, and base58-btc used for the legacy
//! PeerId form.
//!
//! [multibase]: https://github.com/multiformats/multibase

use crate::{Error, Result};

/// RFC4648 base32, lowercase alphabet, no padding. Built the same way
/// the multiaddr codecs in this crate build their custom alphabets.
const BASE32_LOWER_NOPAD: data_encoding::Encoding = new_encoding! {
    symbols: "abcdefghijklmnopqrstuvwxyz234567",
};

/// Multibase prefix for [`BASE32_LOWER_NOPAD`].
pub const PREFIX_BASE32_LOWER: char = 'b';

/// Encode `data` as multibase `'b'` + lowercase base32, no padding.
pub fn encode_base32(data: &[u8]) -> String {
    let mut s = String::with_capacity(1 + BASE32_LOWER_NOPAD.encode_len(data.len()));
    s.push(PREFIX_BASE32_LOWER);
    s.push_str(&BASE32_LOWER_NOPAD.encode(data));
    s
}

/// Decode a multibase `'b'`-prefixed string back into raw bytes.
/// Any other leading character is rejected.
pub fn decode_base32(text: &str) -> Result<Vec<u8>> {
    let mut chars = text.chars();
    match chars.next() {
        Some(PREFIX_BASE32_LOWER) => (),
        Some(ch) => err_at!(InvalidInput, msg: format!("not base32 multibase: {:?}", ch))?,
        None => err_at!(InvalidInput, msg: "empty multibase string")?,
    };

    let body = chars.as_str();
    err_at!(InvalidInput, BASE32_LOWER_NOPAD.decode(body.as_bytes()), "base32 decode")
}

/// Encode raw bytes as base58-btc, with no multibase prefix (legacy
/// PeerId rendering omits the multibase prefix entirely).
pub fn encode_base58btc(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a base58-btc string with no multibase prefix.
pub fn decode_base58btc(text: &str) -> Result<Vec<u8>> {
    err_at!(InvalidInput, bs58::decode(text).into_vec(), "base58btc decode")
}

#[cfg(test)]
#[path = "multibase_test.rs"]
mod multibase_test;
