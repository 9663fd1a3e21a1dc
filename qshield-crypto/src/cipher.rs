//! ChaCha20 stream-cipher adapter.
//!
//! Raw IETF ChaCha20 (32-byte key, 12-byte nonce). Integrity comes from the
//! separate hash MAC in [`crate::mac`], so the unauthenticated stream cipher
//! is used directly rather than an AEAD; callers must verify the tag before
//! decrypting. A `(key, nonce)` pair must never be reused: the same pair
//! reproduces the same keystream, which is what makes decrypt invert encrypt
//! and what makes reuse fatal to confidentiality.

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;

/// Symmetric key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// Encrypts `plaintext` under `key` and `nonce`.
pub fn encrypt(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Vec<u8> {
    apply_keystream(key, nonce, plaintext)
}

/// Decrypts `ciphertext` under `key` and `nonce`.
pub fn decrypt(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Vec<u8> {
    apply_keystream(key, nonce, ciphertext)
}

fn apply_keystream(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], data: &[u8]) -> Vec<u8> {
    let mut cipher = ChaCha20::new(key.into(), nonce.into());
    let mut buffer = data.to_vec();
    cipher.apply_keystream(&mut buffer);
    buffer
}
