//! The closed set of supported digest algorithms and their fixed parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Block size in bytes shared by MD5, SHA-1 and SHA-256.
pub const BLOCK_SIZE: usize = 64;

/// The longest digest any supported algorithm produces (SHA-256).
pub const MAX_OUTPUT_SIZE: usize = 32;

/// Byte order used when reading message words, writing the length footer, and
/// serializing the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Reads one 32-bit word from the first four bytes of `bytes`.
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let word = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match self {
            ByteOrder::Little => u32::from_le_bytes(word),
            ByteOrder::Big => u32::from_be_bytes(word),
        }
    }

    /// Writes `value` into the first four bytes of `out`.
    pub fn write_u32(self, value: u32, out: &mut [u8]) {
        let word = match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        };
        out[..4].copy_from_slice(&word);
    }

    /// Encodes a 64-bit message length.
    pub fn u64_bytes(self, value: u64) -> [u8; 8] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

/// A supported message-digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Every supported algorithm, in declaration order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256];

    /// Input block size in bytes.
    pub const fn block_size(self) -> usize {
        BLOCK_SIZE
    }

    /// Number of 32-bit words in the chaining state.
    pub const fn state_words(self) -> usize {
        match self {
            Algorithm::Md5 => 4,
            Algorithm::Sha1 => 5,
            Algorithm::Sha256 => 8,
        }
    }

    /// Digest length in bytes.
    pub const fn output_size(self) -> usize {
        self.state_words() * 4
    }

    /// Number of compression steps applied to each block.
    pub const fn rounds(self) -> usize {
        match self {
            Algorithm::Md5 => 64,
            Algorithm::Sha1 => 80,
            Algorithm::Sha256 => 64,
        }
    }

    /// MD5 is little-endian throughout; the SHA family is big-endian.
    pub const fn byte_order(self) -> ByteOrder {
        match self {
            Algorithm::Md5 => ByteOrder::Little,
            Algorithm::Sha1 | Algorithm::Sha256 => ByteOrder::Big,
        }
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts `md5`, `sha1`, `sha-1`, `sha256` and `sha-256` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
