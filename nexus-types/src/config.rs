//! Configuration types shared by the provider selector and backends.

use serde::{Deserialize, Serialize};

/// Endpoint used when no live configuration has been saved.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000";

/// Which backend the selector hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Serve bundled static fixtures.
    #[default]
    Demo,
    /// Forward requests to the remote data service.
    Live,
}

/// Connection settings for the live backend.
///
/// The core never validates or persists these values: an unreachable or
/// malformed endpoint simply yields empty results at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the remote data service, e.g. `http://localhost:8000`.
    pub endpoint_url: String,
    /// Credential sent in the `X-API-Key` header.
    pub api_key: String,
}

impl ProviderConfig {
    /// Build a config from an endpoint and credential.
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            api_key: String::new(),
        }
    }
}
