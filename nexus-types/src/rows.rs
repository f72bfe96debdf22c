//! Chart-ready rows derived from fetched observations.
//!
//! Rows are ephemeral: produced per call by the fusion and anomaly engine and
//! discarded once the caller consumes them.

use serde::{Deserialize, Serialize};

use crate::MarketObservation;

/// One retained price point paired with the sentiment of its hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedRow {
    /// Price timestamp rendered as `YYYY-MM-DD HH:MM` (UTC).
    pub time_bucket_label: String,
    /// Close of the retained price point.
    pub price: f64,
    /// Social volume for the hour; `0.0` means no sentiment observation.
    pub sentiment_volume: f64,
    /// Sentiment divergence for the hour; `0.0` means no sentiment observation.
    pub sentiment_divergence: f64,
}

/// A price observation annotated with its anomaly flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRow {
    /// The source observation.
    #[serde(flatten)]
    pub observation: MarketObservation,
    /// The close price when flagged, `None` otherwise.
    pub anomaly_value: Option<f64>,
}

impl AnomalyRow {
    /// True when the observation was flagged.
    #[must_use]
    pub const fn is_anomaly(&self) -> bool {
        self.anomaly_value.is_some()
    }
}
