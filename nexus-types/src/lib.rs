//! NewsBot Nexus data transfer objects and configuration primitives.
//!
//! - `observation`: wire records served by every provider backend.
//! - `rows`: chart-ready rows derived by the fusion and anomaly engine.
//! - `config`: provider mode and live-backend configuration.
//! - `reports`: result envelopes that carry absorbed failures next to data.
#![warn(missing_docs)]

mod config;
mod error;
mod kind;
/// Wire records for market, sentiment, analyst, and earnings series.
pub mod observation;
mod reports;
mod rows;

pub use config::{DEFAULT_ENDPOINT_URL, ProviderConfig, ProviderMode};
pub use error::NexusError;
pub use kind::SeriesKind;
pub use observation::{
    AnalystRating, CorporateEarning, MarketObservation, Observation, SentimentObservation,
};
pub use reports::{HealthStatus, SeriesReport};
pub use rows::{AnomalyRow, FusedRow};
