#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use nexus_core::{HealthStatus, NexusError, ProviderConfig, SeriesKind};
use url::Url;

/// Request header carrying the credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Path of the health probe, relative to the endpoint URL.
pub const HEALTH_PATH: &str = "health";

/// HTTP abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait LiveTransport: Send + Sync {
    /// GET `route/instrument` relative to the endpoint URL and return the
    /// decoded JSON body.
    ///
    /// Every failure, including a non-success status, is reported as
    /// `RemoteFetchFailed` for `kind`.
    async fn get_json(
        &self,
        kind: SeriesKind,
        route: &str,
        instrument: &str,
    ) -> Result<serde_json::Value, NexusError>;

    /// Probe the endpoint's health route.
    async fn health(&self) -> HealthStatus;
}

/// Production transport backed by a `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint_url: String,
    api_key: String,
}

impl ReqwestTransport {
    /// Transport for `config` using a fresh client.
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Transport for `config` reusing an existing client (connection pool).
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Resolve `route` (and an optional trailing `leaf`) below the endpoint URL.
    ///
    /// The endpoint's own path is kept as a prefix. `leaf` always occupies a
    /// single segment: `/` inside it is percent-encoded, and the dot segments
    /// `.` and `..` are rejected since they would resolve to a parent route.
    pub fn url_for(&self, route: &str, leaf: Option<&str>) -> Result<Url, String> {
        if let Some(dots @ ("." | "..")) = leaf {
            return Err(format!("'{dots}' is not a valid path segment"));
        }
        let mut url = Url::parse(&self.endpoint_url)
            .map_err(|e| format!("invalid endpoint url '{}': {e}", self.endpoint_url))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| format!("endpoint url '{}' cannot be a base", self.endpoint_url))?;
            segments.pop_if_empty();
            segments.extend(route.split('/').filter(|s| !s.is_empty()));
            if let Some(leaf) = leaf {
                segments.push(leaf);
            }
        }
        Ok(url)
    }

    async fn get(&self, route: &str, leaf: Option<&str>) -> Result<reqwest::Response, String> {
        let url = self.url_for(route, leaf)?;
        self.client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl LiveTransport for ReqwestTransport {
    async fn get_json(
        &self,
        kind: SeriesKind,
        route: &str,
        instrument: &str,
    ) -> Result<serde_json::Value, NexusError> {
        let resp = self
            .get(route, Some(instrument))
            .await
            .map_err(|msg| NexusError::remote(kind, msg))?;
        let resp = resp
            .error_for_status()
            .map_err(|e| NexusError::remote(kind, e.to_string()))?;
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| NexusError::remote(kind, format!("cannot decode body: {e}")))
    }

    async fn health(&self) -> HealthStatus {
        match self.get(HEALTH_PATH, None).await {
            Ok(resp) => HealthStatus::Reachable {
                http_status: resp.status().as_u16(),
            },
            Err(reason) => HealthStatus::Unreachable { reason },
        }
    }
}

#[cfg(feature = "test-adapters")]
impl dyn LiveTransport {
    /// Test helper that builds a `LiveTransport` from a closure taking the
    /// request path (`route/instrument`).
    ///
    /// An `Err(msg)` from the closure becomes `RemoteFetchFailed`. The health
    /// probe calls the closure with [`HEALTH_PATH`] and reports `200` on `Ok`.
    pub fn from_fn<F>(f: F) -> Arc<dyn LiveTransport>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<serde_json::Value, String>,
    {
        struct FnTransport<F>(F);

        #[async_trait]
        impl<F> LiveTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<serde_json::Value, String>,
        {
            async fn get_json(
                &self,
                kind: SeriesKind,
                route: &str,
                instrument: &str,
            ) -> Result<serde_json::Value, NexusError> {
                (self.0)(&format!("{route}/{instrument}"))
                    .map_err(|msg| NexusError::remote(kind, msg))
            }

            async fn health(&self) -> HealthStatus {
                match (self.0)(HEALTH_PATH) {
                    Ok(_) => HealthStatus::Reachable { http_status: 200 },
                    Err(reason) => HealthStatus::Unreachable { reason },
                }
            }
        }

        Arc::new(FnTransport(f))
    }
}
