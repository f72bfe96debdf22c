use std::collections::HashMap;

use chrono::{DateTime, Utc};
use nexus_types::{FusedRow, MarketObservation, SentimentObservation};

/// Number of price observations skipped between retained points.
///
/// Approximates one point per hour for one-minute bars. The stride is
/// positional: gaps or irregular spacing in the price series are not
/// compensated.
pub const HOURLY_STRIDE: usize = 60;

/// Truncated-hour join key: `YYYY-MM-DDTHH` in UTC.
///
/// Two timestamps in the same hour but different minutes produce the same key.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// let ts = Utc.with_ymd_and_hms(2024, 1, 2, 14, 59, 30).unwrap();
/// assert_eq!(nexus_core::hour_key(ts), "2024-01-02T14");
/// ```
#[must_use]
pub fn hour_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H").to_string()
}

/// Display label for a retained price point: `YYYY-MM-DD HH:MM` in UTC.
#[must_use]
pub fn bucket_label(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Align a fine-grained price series with an hourly sentiment series.
///
/// Keeps every [`HOURLY_STRIDE`]th price observation (indices 0, 60, 120, ...)
/// in input order and pairs each with the sentiment observation sharing its
/// [`hour_key`]. When several sentiment observations share a key the last one
/// wins. A price point without a matching hour gets `0.0` for both sentiment
/// fields; consumers must read that zero as "absent".
///
/// Output length is `ceil(prices.len() / 60)`.
#[must_use]
pub fn hourly_join(
    prices: &[MarketObservation],
    sentiment: &[SentimentObservation],
) -> Vec<FusedRow> {
    #[cfg(feature = "tracing")]
    note_irregular_spacing(prices);

    let by_hour: HashMap<String, &SentimentObservation> = sentiment
        .iter()
        .map(|s| (hour_key(s.timestamp), s))
        .collect();

    prices
        .iter()
        .step_by(HOURLY_STRIDE)
        .map(|p| {
            let matched = by_hour.get(&hour_key(p.timestamp));
            FusedRow {
                time_bucket_label: bucket_label(p.timestamp),
                price: p.close,
                sentiment_volume: matched.map_or(0.0, |s| s.social_volume),
                sentiment_divergence: matched.map_or(0.0, |s| s.sentiment_divergence),
            }
        })
        .collect()
}

#[cfg(feature = "tracing")]
fn note_irregular_spacing(prices: &[MarketObservation]) {
    if let [first, second, ..] = prices
        && (second.timestamp - first.timestamp).num_seconds() != 60
    {
        tracing::debug!(
            step_seconds = (second.timestamp - first.timestamp).num_seconds(),
            stride = HOURLY_STRIDE,
            "price series is not one-minute spaced; hourly stride is approximate"
        );
    }
}
