#![allow(dead_code)]

pub mod counting_provider;

pub use counting_provider::CountingProvider;

use chrono::{DateTime, Duration, TimeZone, Utc};
use nexus::{InstrumentId, MarketObservation, SentimentObservation};

pub const AAPL: &str = "AAPL";

pub fn id(sym: &str) -> InstrumentId {
    InstrumentId::new(sym).expect("valid test instrument")
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// One-minute bars starting at `start` with the given closes.
pub fn minute_bars(sym: &str, start: DateTime<Utc>, closes: &[f64]) -> Vec<MarketObservation> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| MarketObservation {
            timestamp: start + Duration::minutes(i as i64),
            instrument_id: sym.to_string(),
            open: c,
            high: c,
            low: c,
            close: c,
            volume: 100.0,
        })
        .collect()
}

pub fn sentiment(
    sym: &str,
    ts: DateTime<Utc>,
    volume: f64,
    divergence: f64,
) -> SentimentObservation {
    SentimentObservation {
        timestamp: ts,
        instrument_id: sym.to_string(),
        social_volume: volume,
        velocity_label: "steady".to_string(),
        sentiment_divergence: divergence,
    }
}
