use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use nexus::{
    AnalystRating, CorporateEarning, DataProvider, InstrumentId, MarketObservation, NexusError,
    Observation, SentimentObservation, SeriesKind,
};

/// In-memory provider that counts calls and can be told to fail.
#[derive(Clone, Default)]
pub struct CountingProvider {
    pub market: Vec<MarketObservation>,
    pub sentiment: Vec<SentimentObservation>,
    pub fail_sentiment: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    pub fn new(market: Vec<MarketObservation>, sentiment: Vec<SentimentObservation>) -> Self {
        Self {
            market,
            sentiment,
            ..Self::default()
        }
    }

    pub fn failing_sentiment(mut self) -> Self {
        self.fail_sentiment = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn filter_instrument<T: Observation + Clone>(rows: &[T], instrument: &InstrumentId) -> Vec<T> {
    rows.iter()
        .filter(|r| r.instrument_id() == instrument.as_str())
        .cloned()
        .collect()
}

#[async_trait]
impl DataProvider for CountingProvider {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn market_data(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<MarketObservation>, NexusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(filter_instrument(&self.market, instrument))
    }

    async fn analyst_ratings(
        &self,
        _instrument: &InstrumentId,
    ) -> Result<Vec<AnalystRating>, NexusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn corporate_earnings(
        &self,
        _instrument: &InstrumentId,
    ) -> Result<Vec<CorporateEarning>, NexusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn social_sentiment(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<SentimentObservation>, NexusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_sentiment {
            return Err(NexusError::data_unavailable(
                SeriesKind::Sentiment,
                "sentiment export missing",
            ));
        }
        Ok(filter_instrument(&self.sentiment, instrument))
    }
}
