//! MD5 (RFC 1321) block function.
//!
//! MD5 is broken for collision resistance. Use it for checksums and
//! interoperability with legacy formats, never for new security designs.

use super::algorithm::{Algorithm, ByteOrder, BLOCK_SIZE};
use super::engine::oneshot;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The initial values for (A, B, C, D) from RFC 1321.
pub const INITIAL_STATE: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
#[rustfmt::skip]
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left rotation applied at each step, grouped by round.
#[rustfmt::skip]
static S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// Splits a block into its 16 little-endian words.
///
/// MD5 does not expand the message; each step reads one of these words through
/// [`message_index`].
pub fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 16] {
    let mut w = [0u32; 16];
    for (i, word) in w.iter_mut().enumerate() {
        *word = ByteOrder::Little.read_u32(&block[4 * i..]);
    }
    w
}

/// Index of the message word consumed at step `i` (0..64).
pub const fn message_index(i: usize) -> usize {
    match i / 16 {
        0 => i,
        1 => (5 * i + 1) % 16,
        2 => (3 * i + 5) % 16,
        _ => (7 * i) % 16,
    }
}

/// Runs the 64 MD5 steps over one block and folds the result into `state`.
pub fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_SIZE]) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let f = match i / 16 {
            // F
            0 => (b & c) | (!b & d),
            // G
            1 => (b & d) | (c & !d),
            // H
            2 => b ^ c ^ d,
            // I
            _ => c ^ (b | !d),
        };

        let temp = a
            .wrapping_add(f)
            .wrapping_add(K[i])
            .wrapping_add(w[message_index(i)]);
        let temp = temp.rotate_left(S[i]).wrapping_add(b);

        a = d;
        d = c;
        c = b;
        b = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Convenience function to compute an MD5 digest in a single shot.
pub fn md5_digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let mut output = [0u8; MD5_OUTPUT_SIZE];
    output.copy_from_slice(oneshot(Algorithm::Md5, data).as_bytes());
    output
}
