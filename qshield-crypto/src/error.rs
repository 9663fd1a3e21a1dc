//! Crypto core error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the hybrid encryption core.
///
/// `MalformedEnvelope` and `AuthenticationFailed` are typed separately for
/// programmatic handling, but callers should render both with the same
/// neutral wording so an attacker cannot learn which check rejected an
/// envelope.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("envelope verification failed (wrong key or tampered data)")]
    AuthenticationFailed,

    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    #[error("KEM ciphertext could not be processed")]
    DecapsulationFailed,

    #[error("decrypted payload is not valid UTF-8")]
    InvalidPlaintextEncoding,
}
