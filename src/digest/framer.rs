//! Merkle–Damgård padding for the final, partial block.
//!
//! The tail of a message is extended with a single `0x80` marker byte, zero fill,
//! and the total message length in bits as a 64-bit integer occupying the last
//! eight bytes. When fewer than nine bytes remain in the partial block the footer
//! spills into a second block that holds only zeros and the length.

use super::algorithm::{ByteOrder, BLOCK_SIZE};

/// Size of the trailing bit-length field.
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Largest pending length whose marker and footer still fit in one block.
pub const MAX_SINGLE_BLOCK_TAIL: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE - 1;

/// The one or two padded blocks that finish a message.
#[derive(Debug, Clone)]
pub struct PaddedTail {
    blocks: [[u8; BLOCK_SIZE]; 2],
    count: usize,
}

impl PaddedTail {
    /// Number of blocks produced, either 1 or 2.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false; padding produces at least one block.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The padded blocks in processing order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_SIZE]> {
        self.blocks[..self.count].iter()
    }
}

/// Pads the pending bytes of a message.
///
/// `pending` holds the bytes left over after every complete block was consumed
/// and must be shorter than a block. `bit_len` is the length of the whole message
/// in bits, already reduced modulo 2^64.
pub fn pad(pending: &[u8], bit_len: u64, order: ByteOrder) -> PaddedTail {
    debug_assert!(pending.len() < BLOCK_SIZE);

    let mut blocks = [[0u8; BLOCK_SIZE]; 2];
    blocks[0][..pending.len()].copy_from_slice(pending);
    blocks[0][pending.len()] = 0x80;

    let count = if pending.len() > MAX_SINGLE_BLOCK_TAIL { 2 } else { 1 };
    blocks[count - 1][BLOCK_SIZE - LENGTH_FIELD_SIZE..].copy_from_slice(&order.u64_bytes(bit_len));

    PaddedTail { blocks, count }
}
