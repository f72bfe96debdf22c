//! Deterministic bundled dataset.
//!
//! Three instruments (AAPL, MSFT, NVDA) with three hours of one-minute bars
//! starting 2024-01-02 14:30 UTC, hourly sentiment covering those hours, and a
//! handful of analyst ratings and earnings releases.

pub mod earnings;
pub mod market;
pub mod ratings;
pub mod sentiment;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Instruments present in the bundled dataset.
pub const SYMBOLS: &[&str] = &["AAPL", "MSFT", "NVDA"];

pub(crate) fn utc(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}
