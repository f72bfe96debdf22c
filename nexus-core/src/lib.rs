//! nexus-core
//!
//! Core types, traits, and utilities shared across the nexus workspace.
//!
//! - `types`: re-exported value objects (observations, rows, config, errors).
//! - `provider`: the `DataProvider` trait implemented by every backend.
//! - `instrument`: the validated `InstrumentId` accepted by provider calls.
//! - `timeseries`: the hourly price/sentiment join and the anomaly flag.
//!
//! Everything under `timeseries` is pure and synchronous; it operates on
//! series that were already fetched and never touches a provider.
#![warn(missing_docs)]

/// Validated instrument identifiers.
pub mod instrument;
/// The capability contract shared by the static and live backends.
pub mod provider;
/// Time-series utilities for fusing and flagging fetched series.
pub mod timeseries;
pub mod types;

pub use instrument::InstrumentId;
pub use provider::DataProvider;
pub use timeseries::anomaly::{ANOMALY_SIGMA, SeriesStats, flag_anomalies};
pub use timeseries::fusion::{HOURLY_STRIDE, bucket_label, hour_key, hourly_join};
pub use timeseries::util::{select_instrument, sort_by_timestamp};
pub use types::*;
