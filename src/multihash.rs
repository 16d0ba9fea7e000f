//! Module implements the slice of the [multihash] specification this
//! crate needs: the `identity` passthrough and `sha2-256`, the only two
//! function codes a libp2p PeerId ever uses.
//!
//! [multihash]: https://github.com/multiformats/multihash

use sha2::{Digest, Sha256};

use crate::{multicodec, multicodec::Multicodec, varint, Error, Result};

/// `code ‖ len ‖ digest`, per the multihash spec.
#[derive(Clone, Eq, PartialEq)]
pub struct Multihash {
    codec: Multicodec,
    digest: Vec<u8>,
}

impl Multihash {
    /// Build a multihash in one shot: for the `identity` codec, `input`
    /// is carried verbatim as the digest; for `sha2-256`, `input` is
    /// hashed first. Any other codec is rejected, since this crate never
    /// needs one.
    pub fn new(codec: Multicodec, input: &[u8]) -> Result<Multihash> {
        let digest = match codec.to_code() {
            multicodec::IDENTITY => input.to_vec(),
            multicodec::SHA2_256 => Sha256::digest(input).to_vec(),
            code => err_at!(InvalidInput, msg: format!("unsupported multihash codec 0x{:x}", code))?,
        };

        Ok(Multihash { codec, digest })
    }

    /// Encode as `code ‖ varint(len) ‖ digest`.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = self.codec.encode()?;
        varint::encode_u64(self.digest.len() as u64, &mut buf);
        buf.extend_from_slice(&self.digest);
        Ok(buf)
    }

    /// Decode a multihash from the front of `data`, returning it along
    /// with the remaining bytes.
    pub fn decode(data: &[u8]) -> Result<(Multihash, &[u8])> {
        let (codec, data) = Multicodec::decode(data)?;
        let (n, data) = varint::decode_u64(data)?;
        let n = n as usize;
        if data.len() < n {
            err_at!(InvalidInput, msg: format!("multihash digest truncated: want {} have {}", n, data.len()))?;
        }
        let (digest, rest) = data.split_at(n);

        match codec.to_code() {
            multicodec::IDENTITY | multicodec::SHA2_256 => (),
            code => err_at!(InvalidInput, msg: format!("unsupported multihash codec 0x{:x}", code))?,
        };

        Ok((
            Multihash {
                codec,
                digest: digest.to_vec(),
            },
            rest,
        ))
    }

    /// The multicodec function code this multihash was built with.
    pub fn codec(&self) -> Multicodec {
        self.codec
    }

    /// The raw digest bytes (the unhashed input, for `identity`).
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Split into `(codec, digest)`, consuming self.
    pub fn unwrap(self) -> Result<(Multicodec, Vec<u8>)> {
        Ok((self.codec, self.digest))
    }
}

impl std::fmt::Debug for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Multihash")
            .field("codec", &self.codec)
            .field("digest", &hex_string(&self.digest))
            .finish()
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "multihash_test.rs"]
mod multihash_test;
