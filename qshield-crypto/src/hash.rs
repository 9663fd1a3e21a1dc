//! SHA-256 digest adapter.

use sha2::{Digest, Sha256};

/// Digest output length in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Computes the SHA-256 digest of `data`.
pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    Sha256::digest(data).into()
}
