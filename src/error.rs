use thiserror::Error;

use crate::digest::Algorithm;

/// Errors produced by the digest engine.
///
/// Digest computation itself is total over every byte sequence; the only
/// failures are misuse of an engine's lifecycle and unrecognised algorithm names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `update` or `finalize` was called on an engine that has already produced
    /// its digest. Call `reset` before reusing it.
    #[error("{algorithm} engine already finalized; call reset() before reuse")]
    Finalized { algorithm: Algorithm },

    /// The name does not match any supported algorithm.
    #[error("unknown digest algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Finalized {
            algorithm: Algorithm::Sha256,
        };
        assert_eq!(
            err.to_string(),
            "SHA-256 engine already finalized; call reset() before reuse"
        );

        let err = Error::UnknownAlgorithm("whirlpool".to_string());
        assert_eq!(err.to_string(), "unknown digest algorithm: \"whirlpool\"");
    }
}
