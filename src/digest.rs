pub mod algorithm;
#[cfg(feature = "parallel")]
pub mod batch;
pub mod engine;
pub mod framer;
pub mod md5;
pub mod sha1;
pub mod sha256;

// Re-export the algorithm selector
pub use algorithm::{Algorithm, ByteOrder, BLOCK_SIZE, MAX_OUTPUT_SIZE};

// Re-export the streaming engine
pub use engine::{oneshot, Digest, Engine, Phase};

// Re-export fixed-size convenience functions
pub use md5::{md5_digest, MD5_OUTPUT_SIZE};
pub use sha1::{sha1_digest, SHA1_OUTPUT_SIZE};
pub use sha256::{sha256_digest, SHA256_OUTPUT_SIZE};

#[cfg(feature = "parallel")]
pub use batch::digest_all;
