//! Wire records in the shape served by the remote data service and the
//! bundled fixtures.
//!
//! Field names on the wire follow the dataset columns (`Timestamp`, `Ticker`,
//! `Social_Media_Volume`, ...); the Rust side uses snake case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped OHLCV price observation for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    /// Bar timestamp (UTC).
    #[serde(rename = "Timestamp", with = "wire_ts")]
    pub timestamp: DateTime<Utc>,
    /// Ticker-like instrument identifier.
    #[serde(rename = "Ticker")]
    pub instrument_id: String,
    /// Opening price.
    #[serde(rename = "Open")]
    pub open: f64,
    /// Highest price.
    #[serde(rename = "High")]
    pub high: f64,
    /// Lowest price.
    #[serde(rename = "Low")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: f64,
    /// Traded volume. Services exporting through dataframes may send it as a
    /// float (`1200.0`), so any JSON number is accepted.
    #[serde(rename = "Volume")]
    pub volume: f64,
}

/// A timestamped social sentiment observation for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentObservation {
    /// Hour timestamp (UTC).
    #[serde(rename = "Timestamp", with = "wire_ts")]
    pub timestamp: DateTime<Utc>,
    /// Ticker-like instrument identifier.
    #[serde(rename = "Ticker")]
    pub instrument_id: String,
    /// Number of social posts observed in the hour.
    #[serde(rename = "Social_Media_Volume")]
    pub social_volume: f64,
    /// Qualitative velocity label, e.g. `"Rising"`.
    #[serde(rename = "Social_Media_Velocity")]
    pub velocity_label: String,
    /// Divergence between social sentiment and price action.
    #[serde(rename = "Sentiment_Divergence")]
    pub sentiment_divergence: f64,
}

/// An analyst rating change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystRating {
    /// Source identifier of the rating event.
    #[serde(rename = "Rating_ID")]
    pub rating_id: String,
    /// Ticker-like instrument identifier.
    #[serde(rename = "Ticker")]
    pub instrument_id: String,
    /// Publication timestamp (UTC).
    #[serde(rename = "Timestamp", with = "wire_ts")]
    pub timestamp: DateTime<Utc>,
    /// Analyst who issued the rating.
    #[serde(rename = "Analyst_Name")]
    pub analyst_name: String,
    /// Brokerage the analyst works for.
    #[serde(rename = "Brokerage_Name")]
    pub brokerage_name: String,
    /// Rating before the change.
    #[serde(rename = "Previous_Rating")]
    pub previous_rating: String,
    /// Rating after the change.
    #[serde(rename = "New_Rating")]
    pub new_rating: String,
    /// Price target before the change.
    #[serde(rename = "Previous_Price_Target")]
    pub previous_price_target: f64,
    /// Price target after the change.
    #[serde(rename = "New_Price_Target")]
    pub new_price_target: f64,
}

/// A corporate earnings release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateEarning {
    /// Source identifier of the release.
    #[serde(rename = "Earning_ID")]
    pub earning_id: String,
    /// Ticker-like instrument identifier.
    #[serde(rename = "Ticker")]
    pub instrument_id: String,
    /// Release timestamp (UTC).
    #[serde(rename = "Release_Timestamp", with = "wire_ts")]
    pub release_timestamp: DateTime<Utc>,
    /// Fiscal quarter label, e.g. `"Q4 2023"`.
    #[serde(rename = "Fiscal_Quarter")]
    pub fiscal_quarter: String,
    /// Reported earnings per share.
    #[serde(rename = "EPS_Actual")]
    pub eps_actual: f64,
    /// Consensus earnings per share.
    #[serde(rename = "EPS_Consensus")]
    pub eps_consensus: f64,
    /// Reported revenue.
    #[serde(rename = "Revenue_Actual")]
    pub revenue_actual: f64,
    /// Consensus revenue.
    #[serde(rename = "Revenue_Consensus")]
    pub revenue_consensus: f64,
    /// EPS surprise.
    #[serde(rename = "Surprise_EPS")]
    pub surprise_eps: f64,
    /// Revenue surprise expressed as a z-score.
    #[serde(rename = "Surprise_Revenue_ZScore")]
    pub surprise_revenue_zscore: f64,
}

/// Records that expose a timestamp and an instrument identifier.
///
/// Backends use this to filter by instrument and order ascending.
pub trait Observation {
    /// Timestamp used for ordering.
    fn timestamp(&self) -> DateTime<Utc>;
    /// Instrument the record belongs to.
    fn instrument_id(&self) -> &str;
}

macro_rules! impl_observation {
    ($ty:ty, $ts:ident) => {
        impl Observation for $ty {
            fn timestamp(&self) -> DateTime<Utc> {
                self.$ts
            }
            fn instrument_id(&self) -> &str {
                &self.instrument_id
            }
        }
    };
}

impl_observation!(MarketObservation, timestamp);
impl_observation!(SentimentObservation, timestamp);
impl_observation!(AnalystRating, timestamp);
impl_observation!(CorporateEarning, release_timestamp);

/// Timestamp codec accepting RFC 3339 or naive `YYYY-MM-DD HH:MM:SS` (UTC).
pub mod wire_ts {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    /// Parse a wire timestamp. Naive values are interpreted as UTC.
    #[must_use]
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// Serialize as RFC 3339 with a `Z` suffix.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    /// Deserialize from any accepted wire format.
    ///
    /// # Errors
    /// Fails when the string matches none of the accepted formats.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("unrecognised timestamp: {raw}")))
    }
}
