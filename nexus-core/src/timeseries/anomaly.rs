use nexus_types::{AnomalyRow, MarketObservation};

/// Number of standard deviations a close must exceed to be flagged.
pub const ANOMALY_SIGMA: f64 = 2.0;

/// Whole-series statistics of closing prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// Arithmetic mean of the closes.
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
}

impl SeriesStats {
    /// Compute mean and population standard deviation of the closes.
    ///
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn of_closes(series: &[MarketObservation]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = series.len() as f64;
        let mean = series.iter().map(|o| o.close).sum::<f64>() / n;
        let variance = series
            .iter()
            .map(|o| (o.close - mean).powi(2))
            .sum::<f64>()
            / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Absolute deviation above which a close is anomalous.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        ANOMALY_SIGMA * self.std_dev
    }

    /// Strict comparison: a close exactly at the threshold is not flagged, so a
    /// zero-variance series never flags anything.
    #[must_use]
    pub fn is_anomalous(&self, close: f64) -> bool {
        (close - self.mean).abs() > self.threshold()
    }
}

/// Flag closes deviating from the series mean by more than two population
/// standard deviations.
///
/// The statistics cover the whole input and are recomputed on every call.
/// Output has the same length and order as the input; `anomaly_value` holds
/// the close when flagged.
#[must_use]
pub fn flag_anomalies(series: &[MarketObservation]) -> Vec<AnomalyRow> {
    let Some(stats) = SeriesStats::of_closes(series) else {
        return Vec::new();
    };
    series
        .iter()
        .map(|o| AnomalyRow {
            observation: o.clone(),
            anomaly_value: stats.is_anomalous(o.close).then_some(o.close),
        })
        .collect()
}
