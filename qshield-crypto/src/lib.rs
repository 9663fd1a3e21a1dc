//! Post-quantum hybrid encryption core for QShield.
//!
//! Provides the client side of the key-custody protocol using:
//! - ML-KEM-1024 for shared-secret encapsulation
//! - ChaCha20 for payload encryption
//! - A hash-based tag (SHA-256 over the encoded envelope text) for integrity
//!
//! # Architecture
//!
//! Secrets travel in two envelope shapes built from the same codec:
//!
//! 1. **Encrypted secret**: a one-shot shared secret is encapsulated to the
//!    recipient's KEM public key and keys a symmetric envelope. Wire form is
//!    four colon-separated base64 fields.
//!
//! 2. **Private-key envelope**: the KEM private key itself, wrapped under a
//!    key derived from the account's master password so the directory
//!    storing it can never read it. Wire form is three dot-separated base64
//!    fields.
//!
//! Every envelope is encrypt-then-MAC and every open is verify-then-decrypt;
//! the tag covers the base64 text of nonce and ciphertext exactly as
//! serialized. Key material types zeroize on drop and redact their `Debug`
//! output.

pub mod cipher;
pub mod custody;
pub mod envelope;
mod error;
pub mod hash;
pub mod kem;
pub mod mac;
pub mod secret;

pub use cipher::{KEY_SIZE, NONCE_SIZE};
pub use custody::{decrypt_private_key, encrypt_private_key, PrivateKeyEnvelope};
pub use envelope::{open, seal, SymmetricEnvelope};
pub use error::{CryptoError, CryptoResult};
pub use kem::{
    decapsulate, encapsulate, generate_keypair, KemKeyPair, KemPublicKey, KemSecretKey,
    SharedSecret, KEM_CIPHERTEXT_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SHARED_SECRET_SIZE,
};
pub use mac::{compute_mac, verify_mac, TAG_SIZE};
pub use secret::{decrypt_secret, encrypt_secret, EncryptedSecret};
