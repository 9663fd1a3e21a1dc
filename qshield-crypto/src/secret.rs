//! Hybrid encrypted-secret engine.
//!
//! Combines ML-KEM-1024 encapsulation with the symmetric envelope codec:
//! each encryption derives a one-shot shared secret for the recipient's
//! public key and uses it as the stream-cipher and MAC key. The wire form is
//! four colon-separated base64 fields,
//! `kem_ciphertext:nonce:ciphertext:tag`, in that fixed order.

use crate::envelope::{self, SymmetricEnvelope};
use crate::error::{CryptoError, CryptoResult};
use crate::kem::{self, KemPublicKey, KemSecretKey};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = ':';

/// A secret encrypted to one recipient's KEM public key.
///
/// The tag inside [`SymmetricEnvelope`] covers the encoded nonce and
/// ciphertext only; the KEM ciphertext authenticates itself through
/// decapsulation, since altering it changes the recovered shared secret and
/// therefore fails the tag check.
#[derive(Clone, Debug)]
pub struct EncryptedSecret {
    pub kem_ciphertext: Vec<u8>,
    pub envelope: SymmetricEnvelope,
}

/// Encrypts a UTF-8 secret to `recipient`.
///
/// The shared secret derived by encapsulation keys the envelope and is
/// zeroized when this call returns.
pub fn encrypt_secret(plaintext: &str, recipient: &KemPublicKey) -> CryptoResult<EncryptedSecret> {
    let (kem_ciphertext, shared_secret) = kem::encapsulate(recipient)?;
    let envelope = envelope::seal(shared_secret.as_bytes(), plaintext.as_bytes());

    Ok(EncryptedSecret {
        kem_ciphertext,
        envelope,
    })
}

/// Decapsulates with `secret_key`, verifies the tag, and decrypts.
///
/// Verification precedes decryption; plaintext is only produced once the tag
/// matches under the recovered shared secret.
pub fn decrypt_secret(secret: &EncryptedSecret, secret_key: &KemSecretKey) -> CryptoResult<String> {
    let shared_secret = kem::decapsulate(&secret.kem_ciphertext, secret_key)?;
    let plaintext = envelope::open(shared_secret.as_bytes(), &secret.envelope)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidPlaintextEncoding)
}

impl fmt::Display for EncryptedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}",
            STANDARD.encode(&self.kem_ciphertext),
            self.envelope.encode(SEPARATOR),
        )
    }
}

impl FromStr for EncryptedSecret {
    type Err = CryptoError;

    fn from_str(wire: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = wire.split(SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(CryptoError::MalformedEnvelope(format!(
                "expected 4 fields, got {}",
                fields.len()
            )));
        }

        let kem_ciphertext = envelope::decode_base64(fields[0], "KEM ciphertext")?;
        let envelope = SymmetricEnvelope::decode_fields(fields[1], fields[2], fields[3])?;

        Ok(Self {
            kem_ciphertext,
            envelope,
        })
    }
}

impl Serialize for EncryptedSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EncryptedSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        wire.parse().map_err(serde::de::Error::custom)
    }
}
