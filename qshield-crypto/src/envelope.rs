//! Symmetric envelope codec.
//!
//! An envelope is `{nonce, ciphertext, tag}` serialized as delimited base64
//! fields (standard alphabet, padded). The tag authenticates the
//! concatenation of the base64 *text* of nonce and ciphertext, not their raw
//! bytes; that convention is part of the wire format and both sides must
//! reproduce it exactly. Opening verifies the tag before any decryption.

use crate::cipher::{self, KEY_SIZE, NONCE_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::mac::{self, TAG_SIZE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;

/// One authenticated unit of stream-cipher output.
#[derive(Clone, Debug)]
pub struct SymmetricEnvelope {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_SIZE],
}

/// Encrypts `plaintext` under `key` with a fresh random nonce and computes
/// the tag over the encoded nonce/ciphertext text.
pub fn seal(key: &[u8; KEY_SIZE], plaintext: &[u8]) -> SymmetricEnvelope {
    let mut nonce = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher::encrypt(key, &nonce, plaintext);
    let tag = mac::compute_mac(authenticated_text(&nonce, &ciphertext).as_bytes(), key);

    SymmetricEnvelope {
        nonce,
        ciphertext,
        tag,
    }
}

/// Verifies the envelope's tag under `key`, then decrypts.
///
/// The tag check happens before any decryption; a mismatch (tampering or a
/// wrong key) fails with [`CryptoError::AuthenticationFailed`] and no
/// plaintext is produced.
pub fn open(key: &[u8; KEY_SIZE], envelope: &SymmetricEnvelope) -> CryptoResult<Vec<u8>> {
    let text = authenticated_text(&envelope.nonce, &envelope.ciphertext);
    if !mac::verify_mac(text.as_bytes(), key, &envelope.tag) {
        return Err(CryptoError::AuthenticationFailed);
    }

    Ok(cipher::decrypt(key, &envelope.nonce, &envelope.ciphertext))
}

/// The exact byte string the tag authenticates.
fn authenticated_text(nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> String {
    format!("{}{}", STANDARD.encode(nonce), STANDARD.encode(ciphertext))
}

impl SymmetricEnvelope {
    /// Serializes as three base64 fields joined by `separator`.
    pub fn encode(&self, separator: char) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            STANDARD.encode(self.nonce),
            STANDARD.encode(&self.ciphertext),
            STANDARD.encode(self.tag),
            sep = separator,
        )
    }

    /// Parses three `separator`-joined base64 fields.
    ///
    /// Purely syntactic: field count, base64 validity, and the fixed nonce
    /// and tag lengths are checked here, with no key material involved.
    pub fn decode(wire: &str, separator: char) -> CryptoResult<Self> {
        let fields: Vec<&str> = wire.split(separator).collect();
        if fields.len() != 3 {
            return Err(CryptoError::MalformedEnvelope(format!(
                "expected 3 fields, got {}",
                fields.len()
            )));
        }
        Self::decode_fields(fields[0], fields[1], fields[2])
    }

    pub(crate) fn decode_fields(
        nonce_b64: &str,
        ciphertext_b64: &str,
        tag_b64: &str,
    ) -> CryptoResult<Self> {
        let nonce = decode_base64(nonce_b64, "nonce")?;
        let nonce: [u8; NONCE_SIZE] = nonce.try_into().map_err(|v: Vec<u8>| {
            CryptoError::MalformedEnvelope(format!(
                "nonce must be {NONCE_SIZE} bytes, got {}",
                v.len()
            ))
        })?;

        let ciphertext = decode_base64(ciphertext_b64, "ciphertext")?;

        let tag = decode_base64(tag_b64, "tag")?;
        let tag: [u8; TAG_SIZE] = tag.try_into().map_err(|v: Vec<u8>| {
            CryptoError::MalformedEnvelope(format!("tag must be {TAG_SIZE} bytes, got {}", v.len()))
        })?;

        Ok(Self {
            nonce,
            ciphertext,
            tag,
        })
    }
}

pub(crate) fn decode_base64(field: &str, name: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(field)
        .map_err(|e| CryptoError::MalformedEnvelope(format!("invalid base64 in {name}: {e}")))
}
