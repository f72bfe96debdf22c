use async_trait::async_trait;

use crate::InstrumentId;
use nexus_types::{
    AnalystRating, CorporateEarning, MarketObservation, NexusError, SentimentObservation,
    SeriesReport,
};

/// Capability contract implemented by every data backend.
///
/// Each operation returns the rows for one instrument ordered ascending by
/// timestamp. An instrument the backend knows nothing about yields an empty
/// vector, never an error: callers treat "no data" and "no such instrument"
/// the same way.
///
/// Callers must not depend on which backend is active. Obtain a handle from
/// the provider selector and pass it to whatever needs data.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// A stable identifier for logs and reports (e.g. "nexus-static").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch fine-grained OHLCV observations.
    async fn market_data(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<MarketObservation>, NexusError>;

    /// Fetch analyst rating changes.
    async fn analyst_ratings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<AnalystRating>, NexusError>;

    /// Fetch corporate earnings releases.
    async fn corporate_earnings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<CorporateEarning>, NexusError>;

    /// Fetch hourly social sentiment observations.
    async fn social_sentiment(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<SentimentObservation>, NexusError>;

    /// Like [`market_data`](Self::market_data) but also reports absorbed failures.
    ///
    /// Backends that never absorb failures can rely on this default.
    async fn market_data_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<MarketObservation>, NexusError> {
        Ok(SeriesReport::ok(
            self.name(),
            self.market_data(instrument).await?,
        ))
    }

    /// Like [`analyst_ratings`](Self::analyst_ratings) but also reports absorbed failures.
    async fn analyst_ratings_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<AnalystRating>, NexusError> {
        Ok(SeriesReport::ok(
            self.name(),
            self.analyst_ratings(instrument).await?,
        ))
    }

    /// Like [`corporate_earnings`](Self::corporate_earnings) but also reports absorbed failures.
    async fn corporate_earnings_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<CorporateEarning>, NexusError> {
        Ok(SeriesReport::ok(
            self.name(),
            self.corporate_earnings(instrument).await?,
        ))
    }

    /// Like [`social_sentiment`](Self::social_sentiment) but also reports absorbed failures.
    async fn social_sentiment_report(
        &self,
        instrument: &InstrumentId,
    ) -> Result<SeriesReport<SentimentObservation>, NexusError> {
        Ok(SeriesReport::ok(
            self.name(),
            self.social_sentiment(instrument).await?,
        ))
    }
}
