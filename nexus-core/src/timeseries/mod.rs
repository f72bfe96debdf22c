//! Time-series utilities shared by backends and chart helpers.
//!
//! Modules include:
//! - `fusion`: align per-minute prices with hourly sentiment
//! - `anomaly`: whole-series two-sigma flagging of closes
//! - `util`: instrument filtering and timestamp ordering
/// Two-sigma anomaly flagging.
pub mod anomaly;
/// Hourly join of price and sentiment series.
pub mod fusion;
/// Filtering and ordering helpers used by backends.
pub mod util;
