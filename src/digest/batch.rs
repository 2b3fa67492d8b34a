//! Hashing many independent messages across the rayon thread pool.
//!
//! Each message gets its own [`Engine`](super::Engine), so no state is shared
//! between workers.

use log::debug;
use rayon::prelude::*;

use super::algorithm::Algorithm;
use super::engine::{oneshot, Digest};

/// Digests every input with `algorithm` in parallel, preserving input order.
pub fn digest_all<T>(algorithm: Algorithm, inputs: &[T]) -> Vec<Digest>
where
    T: AsRef<[u8]> + Sync,
{
    debug!("{}: hashing batch of {} message(s)", algorithm, inputs.len());
    inputs
        .par_iter()
        .map(|input| oneshot(algorithm, input.as_ref()))
        .collect()
}
