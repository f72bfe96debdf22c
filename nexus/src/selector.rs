use std::sync::Arc;

use nexus_core::{DataProvider, HealthStatus, ProviderConfig, ProviderMode};
use nexus_live::LiveBackend;
use nexus_static::StaticBackend;

/// Runtime-switchable owner of the active data source.
///
/// Holds the current [`ProviderMode`], the live [`ProviderConfig`], and the
/// shared static backend. Consumers ask for [`active_provider`] and code only
/// against [`DataProvider`]; they never learn which backend answered.
///
/// Behavior and trade-offs:
/// - The selector is a plain value. Share it behind whatever lock or actor the
///   application already uses; it keeps no global state of its own.
/// - Handles are snapshots. A handle obtained before a mode or config change
///   keeps its old behavior, so the caller must ask again after a change.
///
/// [`active_provider`]: ProviderSelector::active_provider
#[derive(Clone)]
pub struct ProviderSelector {
    mode: ProviderMode,
    config: ProviderConfig,
    generation: u64,
    static_backend: StaticBackend,
    http: reqwest::Client,
}

impl Default for ProviderSelector {
    fn default() -> Self {
        Self::new(StaticBackend::bundled())
    }
}

impl ProviderSelector {
    /// Create a selector in `demo` mode with the default live configuration.
    #[must_use]
    pub fn new(static_backend: StaticBackend) -> Self {
        Self {
            mode: ProviderMode::default(),
            config: ProviderConfig::default(),
            generation: 0,
            static_backend,
            http: reqwest::Client::new(),
        }
    }

    /// Use `client` for every live handle and probe.
    ///
    /// Handles still snapshot the config; only the connection pool is shared.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Start in `mode` instead of `demo`.
    #[must_use]
    pub const fn with_mode(mut self, mode: ProviderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start with `config` as the saved live configuration.
    ///
    /// Does not bump [`config_generation`](Self::config_generation): nothing
    /// could have been fetched under an earlier config yet.
    #[must_use]
    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Currently selected mode.
    #[must_use]
    pub const fn mode(&self) -> ProviderMode {
        self.mode
    }

    /// Currently saved live configuration.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The static backend handed out in `demo` mode.
    #[must_use]
    pub const fn static_backend(&self) -> &StaticBackend {
        &self.static_backend
    }

    /// Counter bumped by every `configure_live*` call.
    ///
    /// Rows fetched under different generations came from different
    /// credentials or endpoints and must not be mixed; compare the value
    /// captured at fetch time with the current one and refetch on mismatch.
    #[must_use]
    pub const fn config_generation(&self) -> u64 {
        self.generation
    }

    /// Return a provider for the current mode and config.
    ///
    /// Behavior and trade-offs:
    /// - `demo`: a clone of the shared static backend (collections already
    ///   loaded are reused).
    /// - `live`: a fresh `LiveBackend` built from a copy of the current
    ///   config, so a later `configure_live` never reaches this handle. All
    ///   live handles share the selector's HTTP connection pool.
    /// - Evaluated on every call; nothing is cached across changes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "nexus::selector::active_provider",
            skip(self),
            fields(mode = ?self.mode, generation = self.generation),
        )
    )]
    #[must_use]
    pub fn active_provider(&self) -> Arc<dyn DataProvider> {
        match self.mode {
            ProviderMode::Demo => Arc::new(self.static_backend.clone()),
            ProviderMode::Live => Arc::new(LiveBackend::with_client(
                self.config.clone(),
                self.http.clone(),
            )),
        }
    }

    /// Switch between `demo` and `live`.
    ///
    /// A pure state change: no probe, no fetch.
    pub fn set_mode(&mut self, mode: ProviderMode) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.mode, to = ?mode, "provider mode changed");
        self.mode = mode;
    }

    /// Replace the live configuration without switching mode.
    ///
    /// Behavior and trade-offs:
    /// - No validation: an empty key or a malformed URL is saved as given and
    ///   only shows up as empty results once `live` mode is used.
    /// - Bumps [`config_generation`](Self::config_generation).
    pub fn configure_live(
        &mut self,
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
    ) {
        self.config = ProviderConfig::new(endpoint_url, api_key);
        self.generation = self.generation.wrapping_add(1);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            endpoint = %self.config.endpoint_url,
            generation = self.generation,
            "live configuration saved"
        );
    }

    /// Save the live configuration, then probe it.
    ///
    /// Behavior and trade-offs:
    /// - The configuration is saved before the probe and kept whatever the
    ///   outcome: the remote service may come online later.
    /// - The returned status is advisory. The caller decides whether to switch
    ///   to `live`; this method never changes the mode.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "nexus::selector::configure_live_checked", skip_all)
    )]
    pub async fn configure_live_checked(
        &mut self,
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> HealthStatus {
        self.configure_live(endpoint_url, api_key);
        self.probe_live().await
    }

    /// Probe the saved live configuration without changing anything.
    pub async fn probe_live(&self) -> HealthStatus {
        LiveBackend::with_client(self.config.clone(), self.http.clone())
            .health()
            .await
    }
}
