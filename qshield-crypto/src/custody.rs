//! Password-based private-key custody.
//!
//! Wraps a KEM private key so it can be stored at the directory without the
//! directory ever being able to read it. The symmetric key is the master
//! password's UTF-8 bytes right-padded with ASCII `'0'` to 32 bytes and
//! truncated to 32. That derivation has no salt and no work factor; it is
//! the wire protocol's own rule, kept for compatibility, and a wrong
//! password surfaces as a failed tag check when unwrapping. The wire form is
//! three dot-separated base64 fields, `nonce.ciphertext.tag`.

use crate::cipher::KEY_SIZE;
use crate::envelope::{self, SymmetricEnvelope};
use crate::error::{CryptoError, CryptoResult};
use crate::kem::KemSecretKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

const SEPARATOR: char = '.';

/// Filler byte for short passwords.
const KEY_FILLER: u8 = b'0';

/// A private key wrapped under a master password.
#[derive(Clone, Debug)]
pub struct PrivateKeyEnvelope {
    pub envelope: SymmetricEnvelope,
}

/// Wraps `secret_key` under `master_password`.
pub fn encrypt_private_key(secret_key: &KemSecretKey, master_password: &str) -> PrivateKeyEnvelope {
    let key = password_key(master_password);

    PrivateKeyEnvelope {
        envelope: envelope::seal(&key, secret_key.as_bytes()),
    }
}

/// Unwraps a private key with `master_password`.
///
/// A wrong password fails the tag check
/// ([`CryptoError::AuthenticationFailed`]); a tag that verifies but covers a
/// payload of the wrong length fails with [`CryptoError::InvalidKey`].
pub fn decrypt_private_key(
    wrapped: &PrivateKeyEnvelope,
    master_password: &str,
) -> CryptoResult<KemSecretKey> {
    let key = password_key(master_password);
    let plaintext = Zeroizing::new(envelope::open(&key, &wrapped.envelope)?);

    KemSecretKey::from_bytes(&plaintext)
}

/// Derives the custody key from the master password.
fn password_key(master_password: &str) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([KEY_FILLER; KEY_SIZE]);
    let bytes = master_password.as_bytes();
    let len = bytes.len().min(KEY_SIZE);
    key[..len].copy_from_slice(&bytes[..len]);
    key
}

impl fmt::Display for PrivateKeyEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.envelope.encode(SEPARATOR))
    }
}

impl FromStr for PrivateKeyEnvelope {
    type Err = CryptoError;

    fn from_str(wire: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            envelope: SymmetricEnvelope::decode(wire, SEPARATOR)?,
        })
    }
}

impl Serialize for PrivateKeyEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PrivateKeyEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        wire.parse().map_err(serde::de::Error::custom)
    }
}
