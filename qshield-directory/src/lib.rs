//! Account directory client for QShield.
//!
//! Talks to the hosted key directory that backs QShield accounts:
//! - Account creation (keypair generation + password custody + enrollment)
//! - Public-key lookup for encrypting to an account
//! - Private-key envelope retrieval for decrypting with a master password
//! - Account deletion
//!
//! All cryptography lives in `qshield-crypto`; this crate owns the HTTP
//! surface and the account workflows on top of it.

pub mod account;
pub mod api_client;
pub mod config;
pub mod error;
pub mod types;

pub use account::AccountManager;
pub use api_client::DirectoryApiClient;
pub use config::DirectoryConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use types::*;
