//! Streaming digest engine shared by every algorithm.
//!
//! An [`Engine`] buffers input until a full block is available, hands complete
//! blocks to the selected compression function, and on [`Engine::finalize`]
//! pads the tail and serializes the chaining state in the algorithm's byte order.
//!
//! Lifecycle: `Init -> Accepting -> Finalized`. A finalized engine rejects further
//! input with [`Error::Finalized`] until [`Engine::reset`] is called.

use std::fmt;
use std::io;

use log::{debug, trace, warn};

use super::algorithm::{Algorithm, BLOCK_SIZE, MAX_OUTPUT_SIZE};
use super::{framer, md5, sha1, sha256};
use crate::error::{Error, Result};

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly created or reset; nothing hashed yet.
    Init,
    /// At least one `update` call has been made.
    Accepting,
    /// The digest has been produced.
    Finalized,
}

/// Chaining state, tagged by algorithm so the word count is fixed per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HashState {
    Md5([u32; 4]),
    Sha1([u32; 5]),
    Sha256([u32; 8]),
}

impl HashState {
    fn initial(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => HashState::Md5(md5::INITIAL_STATE),
            Algorithm::Sha1 => HashState::Sha1(sha1::INITIAL_STATE),
            Algorithm::Sha256 => HashState::Sha256(sha256::INITIAL_STATE),
        }
    }

    fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        match self {
            HashState::Md5(state) => md5::compress(state, block),
            HashState::Sha1(state) => sha1::compress(state, block),
            HashState::Sha256(state) => sha256::compress(state, block),
        }
    }

    fn words(&self) -> &[u32] {
        match self {
            HashState::Md5(state) => &state[..],
            HashState::Sha1(state) => &state[..],
            HashState::Sha256(state) => &state[..],
        }
    }
}

/// A finished message digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    bytes: [u8; MAX_OUTPUT_SIZE],
}

impl Digest {
    fn from_words(algorithm: Algorithm, words: &[u32]) -> Self {
        let order = algorithm.byte_order();
        let mut bytes = [0u8; MAX_OUTPUT_SIZE];
        for (chunk, &word) in bytes.chunks_exact_mut(4).zip(words) {
            order.write_u32(word, chunk);
        }
        Self { algorithm, bytes }
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The raw digest bytes; 16, 20 or 32 of them depending on the algorithm.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.output_size()]
    }

    pub fn len(&self) -> usize {
        self.algorithm.output_size()
    }

    /// Digests are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Uppercase hexadecimal rendering.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("hex", &format_args!("{}", self.to_hex()))
            .finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Incremental digest computation for one algorithm.
///
/// Instances own all of their state, so separate engines can run on separate
/// threads without coordination. A single engine must be updated sequentially.
#[derive(Debug, Clone)]
pub struct Engine {
    algorithm: Algorithm,
    state: HashState,
    /// Bytes not yet forming a complete block
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bits mod 2^64
    bit_len: u64,
    phase: Phase,
}

impl Engine {
    /// Creates an engine bound to `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: HashState::initial(algorithm),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            bit_len: 0,
            phase: Phase::Init,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Number of message bytes absorbed since creation or the last reset.
    pub fn bytes_processed(&self) -> u64 {
        self.bit_len / 8
    }

    /// Feeds more message bytes. Zero-length input is accepted.
    ///
    /// Returns [`Error::Finalized`] if the digest has already been produced.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_open()?;
        self.absorb(data);
        Ok(())
    }

    /// Pads the message, processes the final block(s) and returns the digest.
    ///
    /// Can be called once; afterwards the engine must be [`reset`](Self::reset).
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_open()?;
        Ok(self.finish())
    }

    /// Finalizes, then resets the engine so it can hash a new message.
    pub fn finalize_reset(&mut self) -> Result<Digest> {
        let digest = self.finalize()?;
        self.reset();
        Ok(digest)
    }

    /// Returns the engine to its initial state, discarding any buffered input.
    pub fn reset(&mut self) {
        debug!("{}: reset after {} byte(s)", self.algorithm, self.bytes_processed());
        self.state = HashState::initial(self.algorithm);
        self.buffer = [0u8; BLOCK_SIZE];
        self.buffer_len = 0;
        self.bit_len = 0;
        self.phase = Phase::Init;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.phase == Phase::Finalized {
            warn!("{}: engine used after finalize", self.algorithm);
            return Err(Error::Finalized {
                algorithm: self.algorithm,
            });
        }
        Ok(())
    }

    fn absorb(&mut self, mut data: &[u8]) {
        self.phase = Phase::Accepting;
        self.bit_len = self
            .bit_len
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut blocks = 0usize;

        // top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            self.state.compress(&self.buffer);
            self.buffer_len = 0;
            blocks += 1;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            self.state.compress(block);
            data = rest;
            blocks += 1;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();

        trace!(
            "{}: compressed {} block(s), {} byte(s) pending",
            self.algorithm,
            blocks,
            self.buffer_len
        );
    }

    fn finish(&mut self) -> Digest {
        let tail = framer::pad(
            &self.buffer[..self.buffer_len],
            self.bit_len,
            self.algorithm.byte_order(),
        );
        for block in tail.blocks() {
            self.state.compress(block);
        }
        debug!(
            "{}: finalized {} byte(s) with {} padding block(s)",
            self.algorithm,
            self.bytes_processed(),
            tail.len()
        );

        self.buffer_len = 0;
        self.phase = Phase::Finalized;
        Digest::from_words(self.algorithm, self.state.words())
    }
}

impl io::Write for Engine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hashes one complete in-memory message.
pub fn oneshot(algorithm: Algorithm, data: &[u8]) -> Digest {
    let mut engine = Engine::new(algorithm);
    engine.absorb(data);
    engine.finish()
}
