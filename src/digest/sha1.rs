//! SHA-1 (FIPS 180-4) block function.
//!
//! SHA-1 has practical chosen-prefix collisions. It is kept for checksums and
//! legacy interoperability.

use super::algorithm::{Algorithm, ByteOrder, BLOCK_SIZE};
use super::engine::oneshot;

/// The size of the SHA-1 digest in bytes (160 bits = 20 bytes).
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// H0..H4 from FIPS 180-4 section 5.3.1.
pub const INITIAL_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// One additive constant per group of 20 steps.
static K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Expands a block into the 80-word message schedule.
pub fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 80] {
    let mut w = [0u32; 80];
    for i in 0..16 {
        w[i] = ByteOrder::Big.read_u32(&block[4 * i..]);
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }
    w
}

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Runs the 80 SHA-1 steps over one block and folds the result into `state`.
pub fn compress(state: &mut [u32; 5], block: &[u8; BLOCK_SIZE]) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &word) in w.iter().enumerate() {
        let f = match i / 20 {
            0 => ch(b, c, d),
            1 => parity(b, c, d),
            2 => maj(b, c, d),
            _ => parity(b, c, d),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[i / 20])
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Convenience function to compute a SHA-1 digest in a single shot.
pub fn sha1_digest(data: &[u8]) -> [u8; SHA1_OUTPUT_SIZE] {
    let mut output = [0u8; SHA1_OUTPUT_SIZE];
    output.copy_from_slice(oneshot(Algorithm::Sha1, data).as_bytes());
    output
}
