//! Directory client configuration.

use serde::{Deserialize, Serialize};

/// Hosted directory endpoint.
pub const HOSTED_API_BASE_URL: &str = "https://quantumsure.onrender.com/api";

/// Directory endpoint for a locally running instance.
pub const LOCAL_API_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for the directory client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL for the directory API (e.g., "https://quantumsure.onrender.com/api").
    pub api_base_url: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: HOSTED_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl DirectoryConfig {
    /// Creates a config pointing at a directory running on localhost.
    pub fn local() -> Self {
        Self {
            api_base_url: LOCAL_API_BASE_URL.to_string(),
            ..Self::default()
        }
    }
}
