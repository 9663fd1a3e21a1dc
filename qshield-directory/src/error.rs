//! Directory error types.

use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur talking to the account directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("directory unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("crypto error: {0}")]
    Crypto(#[from] qshield_crypto::CryptoError),
}
