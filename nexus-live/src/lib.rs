//! nexus-live
//!
//! Backend that implements `DataProvider` by forwarding each request to the
//! remote data service over HTTP, attaching the configured credential in the
//! `X-API-Key` header.
//!
//! Failures never reach the caller of the plain operations: a transport error,
//! a non-success status, or an undecodable body is logged with
//! `tracing::warn!` and turned into an empty vector, so a view built on live
//! data degrades to "nothing to show". The `*_report` operations return the
//! same empty data together with the absorbed `RemoteFetchFailed` warning.
#![warn(missing_docs)]

/// Transport definitions and the production adapter backed by `reqwest`.
pub mod adapter;

use std::sync::Arc;

use adapter::{LiveTransport, ReqwestTransport};
use async_trait::async_trait;
use nexus_core::{
    AnalystRating, CorporateEarning, DataProvider, HealthStatus, InstrumentId, MarketObservation,
    NexusError, Observation, ProviderConfig, SentimentObservation, SeriesKind, SeriesReport,
    sort_by_timestamp,
};
use serde::de::DeserializeOwned;

/// Route prefix of the remote service for `kind`.
#[must_use]
pub const fn route(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Market => "api/v1/market-data",
        SeriesKind::AnalystRatings => "api/v1/analyst-ratings",
        SeriesKind::CorporateEarnings => "api/v1/corporate-earnings",
        SeriesKind::Sentiment => "api/v1/sentiment",
    }
}

/// Live backend bound to one configuration snapshot.
///
/// The configuration is copied at construction; saving a new configuration
/// elsewhere never changes what an existing backend talks to.
#[derive(Clone)]
pub struct LiveBackend {
    config: ProviderConfig,
    transport: Arc<dyn LiveTransport>,
}

impl LiveBackend {
    /// Provider name reported by this backend.
    pub const NAME: &'static str = "nexus-live";

    /// Backend for `config` using the production HTTP transport.
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(&config));
        Self { config, transport }
    }

    /// Backend for `config` sharing an existing client's connection pool.
    #[must_use]
    pub fn with_client(config: ProviderConfig, client: reqwest::Client) -> Self {
        let transport = Arc::new(ReqwestTransport::with_client(client, &config));
        Self { config, transport }
    }

    /// Backend for `config` that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ProviderConfig, transport: Arc<dyn LiveTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration snapshot this backend was built from.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Probe the endpoint's health route with the configured credential.
    ///
    /// Any HTTP response counts as reachable; only a request that never
    /// produced a response is unreachable.
    pub async fn health(&self) -> HealthStatus {
        let status = self.transport.health().await;
        if let HealthStatus::Unreachable { reason } = &status {
            tracing::warn!(
                endpoint = %self.config.endpoint_url,
                reason = %reason,
                "live endpoint unreachable"
            );
        }
        status
    }

    async fn fetch<T>(
        &self,
        kind: SeriesKind,
        instrument: &InstrumentId,
    ) -> Result<Vec<T>, NexusError>
    where
        T: DeserializeOwned + Observation + Send,
    {
        let body = self
            .transport
            .get_json(kind, route(kind), instrument.as_str())
            .await?;
        let mut rows: Vec<T> = serde_json::from_value(body)
            .map_err(|e| NexusError::remote(kind, format!("cannot decode records: {e}")))?;
        sort_by_timestamp(&mut rows);
        Ok(rows)
    }

    async fn fetch_report<T>(
        &self,
        kind: SeriesKind,
        instrument: &InstrumentId,
    ) -> SeriesReport<T>
    where
        T: DeserializeOwned + Observation + Send,
    {
        match self.fetch(kind, instrument).await {
            Ok(rows) => SeriesReport::ok(Self::NAME, rows),
            Err(e) => {
                tracing::warn!(
                    kind = %kind,
                    instrument = %instrument,
                    endpoint = %self.config.endpoint_url,
                    error = %e,
                    "live fetch failed; returning empty series"
                );
                SeriesReport::degraded(Self::NAME, e)
            }
        }
    }
}

#[async_trait]
impl DataProvider for LiveBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "NewsBot Nexus API"
    }

    async fn market_data(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<MarketObservation>, NexusError> {
        Ok(self.market_data_report(instrument).await?.into_data())
    }

    async fn analyst_ratings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<AnalystRating>, NexusError> {
        Ok(self.analyst_ratings_report(instrument).await?.into_data())
    }

    async fn corporate_earnings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<CorporateEarning>, NexusError> {
        Ok(self.corporate_earnings_report(instrument).await?.into_data())
    }

    async fn social_sentiment(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<SentimentObservation>, NexusError> {
        Ok(self.social_sentiment_report(instrument).await?.into_data())
    }

    async fn market_data_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<MarketObservation>, NexusError> {
        Ok(self.fetch_report(SeriesKind::Market, instrument).await)
    }

    async fn analyst_ratings_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<AnalystRating>, NexusError> {
        Ok(self.fetch_report(SeriesKind::AnalystRatings, instrument).await)
    }

    async fn corporate_earnings_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<CorporateEarning>, NexusError> {
        Ok(self
            .fetch_report(SeriesKind::CorporateEarnings, instrument)
            .await)
    }

    async fn social_sentiment_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<SentimentObservation>, NexusError> {
        Ok(self.fetch_report(SeriesKind::Sentiment, instrument).await)
    }
}
