//! From-scratch implementations of the MD5, SHA-1 and SHA-256 message digests.
//!
//! Every algorithm is driven by the same [`Engine`], which accepts bytes
//! incrementally and produces a [`Digest`] exactly once:
//!
//! ```
//! use msgdigest::{oneshot, Algorithm, Engine};
//!
//! let mut engine = Engine::new(Algorithm::Sha256);
//! engine.update(b"a").unwrap();
//! engine.update(b"bc").unwrap();
//! let digest = engine.finalize().unwrap();
//!
//! assert_eq!(digest, oneshot(Algorithm::Sha256, b"abc"));
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! MD5 and SHA-1 are broken for collision resistance. They are provided for
//! checksums and interoperability, not for new security designs.

pub mod digest;
pub mod error;

pub use digest::{
    md5_digest, oneshot, sha1_digest, sha256_digest, Algorithm, ByteOrder, Digest, Engine, Phase,
};
pub use error::{Error, Result};

#[cfg(feature = "parallel")]
pub use digest::digest_all;
