//! Hash-based MAC engine.
//!
//! The tag is `SHA-256(message ‖ key)` with the key appended after the
//! message, both as raw bytes. This is the wire protocol's own keyed-hash
//! construction, not HMAC, and is kept exactly as defined for
//! compatibility; every envelope produced or consumed by this crate
//! authenticates with it.

use crate::hash::{self, DIGEST_SIZE};
use subtle::ConstantTimeEq;

/// MAC tag length in bytes.
pub const TAG_SIZE: usize = DIGEST_SIZE;

/// Computes the tag for `message` under `key`.
pub fn compute_mac(message: &[u8], key: &[u8]) -> [u8; TAG_SIZE] {
    let mut keyed = Vec::with_capacity(message.len() + key.len());
    keyed.extend_from_slice(message);
    keyed.extend_from_slice(key);
    hash::digest(&keyed)
}

/// Recomputes the tag and compares it to `expected_tag` in constant time.
pub fn verify_mac(message: &[u8], key: &[u8], expected_tag: &[u8]) -> bool {
    let computed = compute_mac(message, key);
    computed.as_slice().ct_eq(expected_tag).into()
}
