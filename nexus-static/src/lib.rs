//! nexus-static
//!
//! Offline backend that implements `DataProvider` over a fixed dataset.
//!
//! The dataset is either the deterministic bundle compiled into this crate, a
//! directory of JSON exports (`market_data_1min.json`, `analyst_ratings.json`,
//! `corporate_earnings.json`, `social_hourly_features.json`), or a caller
//! supplied [`StaticDataset`]. Each collection is loaded at most once and
//! shared read-only by every clone of the backend.
//!
//! Unlike the live backend, a collection that cannot be loaded is reported as
//! `NexusError::DataUnavailable`: a broken fixture is a packaging problem,
//! not an instrument without data.
#![warn(missing_docs)]

mod fixtures;
mod loader;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use nexus_core::{
    AnalystRating, CorporateEarning, DataProvider, InstrumentId, MarketObservation, NexusError,
    SentimentObservation, SeriesKind, select_instrument,
};
use tokio::sync::OnceCell;

pub use fixtures::SYMBOLS as BUNDLED_SYMBOLS;
pub use fixtures::market::{BARS as BUNDLED_BARS, SPIKE_INDEX as BUNDLED_SPIKE_INDEX};
pub use loader::{
    ANALYST_RATINGS_FILE, CORPORATE_EARNINGS_FILE, MARKET_DATA_FILE, SENTIMENT_FILE,
};

/// Whole-collection dataset served by a [`StaticBackend`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDataset {
    /// One-minute price bars for every instrument.
    pub market: Vec<MarketObservation>,
    /// Analyst rating changes for every instrument.
    pub analyst_ratings: Vec<AnalystRating>,
    /// Earnings releases for every instrument.
    pub corporate_earnings: Vec<CorporateEarning>,
    /// Hourly sentiment for every instrument.
    pub sentiment: Vec<SentimentObservation>,
}

impl StaticDataset {
    /// The deterministic dataset compiled into this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            market: fixtures::market::all(),
            analyst_ratings: fixtures::ratings::all(),
            corporate_earnings: fixtures::earnings::all(),
            sentiment: fixtures::sentiment::all(),
        }
    }
}

enum FixtureSource {
    Bundled,
    Directory(PathBuf),
    Preloaded,
}

struct Collections {
    source: FixtureSource,
    market: OnceCell<Vec<MarketObservation>>,
    analyst_ratings: OnceCell<Vec<AnalystRating>>,
    corporate_earnings: OnceCell<Vec<CorporateEarning>>,
    sentiment: OnceCell<Vec<SentimentObservation>>,
}

impl Collections {
    fn empty(source: FixtureSource) -> Self {
        Self {
            source,
            market: OnceCell::new(),
            analyst_ratings: OnceCell::new(),
            corporate_earnings: OnceCell::new(),
            sentiment: OnceCell::new(),
        }
    }
}

/// Static/offline backend. Cheap to clone; clones share loaded collections.
#[derive(Clone)]
pub struct StaticBackend {
    inner: Arc<Collections>,
}

impl Default for StaticBackend {
    fn default() -> Self {
        Self::bundled()
    }
}

impl StaticBackend {
    /// Backend over the deterministic bundled dataset.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            inner: Arc::new(Collections::empty(FixtureSource::Bundled)),
        }
    }

    /// Backend reading JSON exports from `dir` on first use of each collection.
    ///
    /// Nothing is read here; a missing directory surfaces as
    /// `DataUnavailable` from the first operation that needs it.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Collections::empty(FixtureSource::Directory(dir.into()))),
        }
    }

    /// Backend over an in-memory dataset.
    ///
    /// The dataset is served as given. Unlike a directory export, an empty
    /// collection here is not `DataUnavailable`: every operation on it
    /// returns `Ok(vec![])`, which lets callers build partial datasets.
    #[must_use]
    pub fn from_dataset(dataset: StaticDataset) -> Self {
        let c = Collections {
            source: FixtureSource::Preloaded,
            market: OnceCell::new_with(Some(dataset.market)),
            analyst_ratings: OnceCell::new_with(Some(dataset.analyst_ratings)),
            corporate_earnings: OnceCell::new_with(Some(dataset.corporate_earnings)),
            sentiment: OnceCell::new_with(Some(dataset.sentiment)),
        };
        Self { inner: Arc::new(c) }
    }

    /// Load (once) and return a whole collection.
    async fn collection<'a, T, F>(
        &'a self,
        cell: &'a OnceCell<Vec<T>>,
        kind: SeriesKind,
        file: &'static str,
        bundled: F,
    ) -> Result<&'a [T], NexusError>
    where
        T: serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Vec<T> + Send,
    {
        let rows = cell
            .get_or_try_init(|| async move {
                match &self.inner.source {
                    FixtureSource::Bundled => Ok(bundled()),
                    FixtureSource::Directory(dir) => loader::read_collection(dir, file, kind).await,
                    // Preloaded cells are filled in `from_dataset`.
                    FixtureSource::Preloaded => {
                        unreachable!("preloaded collection not initialised")
                    }
                }
            })
            .await?;
        Ok(rows.as_slice())
    }
}

#[async_trait]
impl DataProvider for StaticBackend {
    fn name(&self) -> &'static str {
        "nexus-static"
    }

    fn vendor(&self) -> &'static str {
        "Bundled fixtures"
    }

    async fn market_data(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<MarketObservation>, NexusError> {
        let all = self
            .collection(
                &self.inner.market,
                SeriesKind::Market,
                MARKET_DATA_FILE,
                fixtures::market::all,
            )
            .await?;
        Ok(select_instrument(all, instrument))
    }

    async fn analyst_ratings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<AnalystRating>, NexusError> {
        let all = self
            .collection(
                &self.inner.analyst_ratings,
                SeriesKind::AnalystRatings,
                ANALYST_RATINGS_FILE,
                fixtures::ratings::all,
            )
            .await?;
        Ok(select_instrument(all, instrument))
    }

    async fn corporate_earnings(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<CorporateEarning>, NexusError> {
        let all = self
            .collection(
                &self.inner.corporate_earnings,
                SeriesKind::CorporateEarnings,
                CORPORATE_EARNINGS_FILE,
                fixtures::earnings::all,
            )
            .await?;
        Ok(select_instrument(all, instrument))
    }

    async fn social_sentiment(
        &self,
        instrument: &InstrumentId,
    ) -> Result<Vec<SentimentObservation>, NexusError> {
        let all = self
            .collection(
                &self.inner.sentiment,
                SeriesKind::Sentiment,
                SENTIMENT_FILE,
                fixtures::sentiment::all,
            )
            .await?;
        Ok(select_instrument(all, instrument))
    }
}
