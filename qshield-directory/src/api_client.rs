//! HTTP client for the account directory API.
//!
//! Wraps the directory's four endpoints: public-key lookup, private-key
//! envelope retrieval, account creation, and account deletion. Uses reqwest
//! with JSON serialization; the `api_key` bearer credential travels as a
//! request header on reads and in the JSON body on deletes, matching the
//! directory's interface.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::types::StoredAccountReceipt;
use base64::{engine::general_purpose::STANDARD, Engine};
use qshield_crypto::custody::PrivateKeyEnvelope;
use qshield_crypto::KemPublicKey;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// HTTP client for the QShield account directory.
pub struct DirectoryApiClient {
    client: Client,
    config: DirectoryConfig,
}

impl DirectoryApiClient {
    pub fn new(config: DirectoryConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    // ── Key lookups ──

    /// Fetches the account's published public key.
    pub async fn fetch_public_key(&self, api_key: &str) -> DirectoryResult<KemPublicKey> {
        let url = format!("{}/qshield/public-key", self.config.api_base_url);
        let resp = self
            .client
            .get(&url)
            .header("api_key", api_key)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| DirectoryError::Api(e.to_string()))?;

        #[derive(Deserialize)]
        struct Resp {
            public_key: String,
        }
        let data: Resp = resp.json().await?;

        let bytes = STANDARD
            .decode(&data.public_key)
            .map_err(|e| DirectoryError::Api(format!("invalid public key encoding: {e}")))?;
        let key = KemPublicKey::from_bytes(&bytes)?;

        debug!("fetched public key, fingerprint {}", fingerprint(key.as_bytes()));
        Ok(key)
    }

    /// Fetches the account's password-wrapped private key.
    pub async fn fetch_private_key_envelope(
        &self,
        api_key: &str,
    ) -> DirectoryResult<PrivateKeyEnvelope> {
        let url = format!("{}/qshield/epk", self.config.api_base_url);
        let resp = self
            .client
            .get(&url)
            .header("api_key", api_key)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| DirectoryError::Api(e.to_string()))?;

        #[derive(Deserialize)]
        struct Resp {
            encrypted_private_key: String,
        }
        let data: Resp = resp.json().await?;

        Ok(data.encrypted_private_key.parse()?)
    }

    // ── Account lifecycle ──

    /// Stores a new account record and returns its receipt.
    ///
    /// Only the public key and the wrapped private key leave the caller;
    /// the unwrapped secret key never does.
    pub async fn store_account(
        &self,
        public_key: &KemPublicKey,
        envelope: &PrivateKeyEnvelope,
        secret_phrase: &str,
    ) -> DirectoryResult<StoredAccountReceipt> {
        let url = format!("{}/qshield/create", self.config.api_base_url);
        debug!(
            "storing account, public key fingerprint {}",
            fingerprint(public_key.as_bytes())
        );

        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "public_key": STANDARD.encode(public_key.as_bytes()),
                "secret_phrase": secret_phrase,
                "encrypted_private_key": envelope.to_string(),
            }))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| DirectoryError::Api(e.to_string()))?;

        Ok(resp.json().await?)
    }

    /// Deletes the account record. The directory validates the secret phrase.
    pub async fn delete_account(
        &self,
        api_key: &str,
        secret_phrase: &str,
    ) -> DirectoryResult<String> {
        let url = format!("{}/qshield/delete", self.config.api_base_url);
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "api_key": api_key,
                "secret_phrase": secret_phrase,
            }))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| DirectoryError::Api(e.to_string()))?;

        #[derive(Deserialize)]
        struct Resp {
            message: String,
        }
        let data: Resp = resp.json().await?;
        Ok(data.message)
    }
}

/// SHA-256 fingerprint of key bytes, safe to log.
fn fingerprint(key: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(key))
}
