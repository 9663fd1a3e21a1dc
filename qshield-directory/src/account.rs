//! Account lifecycle: keypair generation, custody wrapping, directory
//! enrollment, and secret exchange.
//!
//! Orchestrates account workflows by coordinating between the directory API
//! client (key publication, envelope retrieval) and the crypto engine
//! (keypair generation, password custody, hybrid encryption).

use crate::api_client::DirectoryApiClient;
use crate::error::DirectoryResult;
use crate::types::CreatedAccount;
use qshield_crypto::{custody, kem, secret, EncryptedSecret};
use std::sync::Arc;
use tracing::info;

/// Orchestrates account creation and secret exchange against the directory.
pub struct AccountManager {
    api: Arc<DirectoryApiClient>,
}

impl AccountManager {
    pub fn new(api: Arc<DirectoryApiClient>) -> Self {
        Self { api }
    }

    /// Creates a new account: generates an ML-KEM keypair, wraps the private
    /// key under the master password, and stores both in the directory.
    ///
    /// The returned keypair is owned by the caller. Losing the master
    /// password makes the stored envelope unrecoverable; the directory
    /// cannot unwrap it.
    pub async fn create_account(
        &self,
        secret_phrase: &str,
        master_password: &str,
    ) -> DirectoryResult<CreatedAccount> {
        let keypair = kem::generate_keypair();
        let envelope = custody::encrypt_private_key(&keypair.secret, master_password);

        let receipt = self
            .api
            .store_account(&keypair.public, &envelope, secret_phrase)
            .await?;
        info!("created directory account: {}", receipt.message);

        Ok(CreatedAccount {
            api_key: receipt.api_key,
            message: receipt.message,
            keypair,
            private_key_envelope: envelope,
        })
    }

    /// Encrypts a secret for the account identified by `api_key`, using the
    /// public key published in the directory.
    pub async fn encrypt_secret(
        &self,
        api_key: &str,
        plaintext: &str,
    ) -> DirectoryResult<EncryptedSecret> {
        let public_key = self.api.fetch_public_key(api_key).await?;
        Ok(secret::encrypt_secret(plaintext, &public_key)?)
    }

    /// Decrypts a secret addressed to the account identified by `api_key`.
    ///
    /// Fetches the wrapped private key from the directory and unwraps it
    /// with the master password; a wrong password surfaces as
    /// `AuthenticationFailed`.
    pub async fn decrypt_secret(
        &self,
        api_key: &str,
        encrypted: &EncryptedSecret,
        master_password: &str,
    ) -> DirectoryResult<String> {
        let envelope = self.api.fetch_private_key_envelope(api_key).await?;
        let private_key = custody::decrypt_private_key(&envelope, master_password)?;
        Ok(secret::decrypt_secret(encrypted, &private_key)?)
    }

    /// Deletes the account from the directory. Secret-phrase validation is
    /// the directory's responsibility.
    pub async fn delete_account(
        &self,
        api_key: &str,
        secret_phrase: &str,
    ) -> DirectoryResult<String> {
        let message = self.api.delete_account(api_key, secret_phrase).await?;
        info!("deleted directory account");
        Ok(message)
    }
}
