//! Module handles the narrow slice of the [multicodec] table this crate
//! actually emits or consumes: the multihash function codes used by
//! PeerId, and the CIDv1 / libp2p-key codes used to wrap a PeerId's
//! multihash into its modern string form.
//!
//! [multicodec]: https://github.com/multiformats/multicodec

use crate::{varint, Error, Result};

/// Identity multihash: the digest *is* the input, unhashed.
pub const IDENTITY: u64 = 0x00;
/// CIDv1 version byte.
pub const CID_V1: u64 = 0x01;
/// SHA2-256 multihash function code.
pub const SHA2_256: u64 = 0x12;
/// `libp2p-key` multicodec, used as the CID content-type for PeerIds.
pub const LIBP2P_KEY: u64 = 0x72;

/// A single multicodec code point, varint-encoded on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Multicodec(u64);

impl From<u64> for Multicodec {
    fn from(code: u64) -> Self {
        Multicodec(code)
    }
}

impl std::fmt::Display for Multicodec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Multicodec {
    /// Construct from a known code point. Any `u64` is accepted; this
    /// crate only ever constructs the four constants above.
    pub fn from_code(code: u64) -> Result<Multicodec> {
        Ok(Multicodec(code))
    }

    /// Varint-encode this code point.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        varint::encode_u64(self.0, &mut buf);
        Ok(buf)
    }

    /// Decode a varint-encoded code point from the front of `data`.
    pub fn decode(data: &[u8]) -> Result<(Multicodec, &[u8])> {
        let (code, rem) = varint::decode_u64(data)?;
        Ok((Multicodec(code), rem))
    }

    /// The raw numeric code point.
    pub fn to_code(&self) -> u64 {
        self.0
    }
}
