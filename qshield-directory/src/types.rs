//! Shared types for directory operations.

use qshield_crypto::custody::PrivateKeyEnvelope;
use qshield_crypto::KemKeyPair;
use serde::{Deserialize, Serialize};

/// Receipt returned by the directory after storing a new account.
///
/// The directory signals success as free text in `message` rather than
/// through a dedicated field; the HTTP status code is the reliable signal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredAccountReceipt {
    pub api_key: String,
    pub message: String,
}

/// A freshly created account, owned by the caller.
///
/// The secret key is returned here and nowhere else; the directory only
/// ever stores its password-wrapped form.
#[derive(Debug)]
pub struct CreatedAccount {
    /// Bearer credential for subsequent directory reads.
    pub api_key: String,
    /// Free-text status message from the directory.
    pub message: String,
    /// The generated ML-KEM keypair.
    pub keypair: KemKeyPair,
    /// The password-wrapped private key, as stored in the directory.
    pub private_key_envelope: PrivateKeyEnvelope,
}
