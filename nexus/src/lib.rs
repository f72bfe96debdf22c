//! Nexus gives a dashboard one way to read market and sentiment series,
//! whether the data comes from bundled fixtures or the remote service.
//!
//! Overview
//! - `ProviderSelector` owns the mode (`demo` or `live`) and the live
//!   configuration and hands out `DataProvider` handles.
//! - `StaticBackend` serves deterministic fixtures; `LiveBackend` forwards to
//!   the HTTP service and degrades to empty results when it cannot.
//! - `chart` fetches through a handle and applies the pure engine from
//!   `nexus_core`: the hourly price/sentiment join and the 2-sigma anomaly flag.
//!
//! Key behaviors and trade-offs
//! - Error asymmetry: a broken static fixture is an error
//!   (`DataUnavailable`), a live outage is an empty series plus a logged
//!   warning. Use the `*_report` operations to see absorbed live failures.
//! - Hourly join: keeps every 60th price point by position, not by clock;
//!   missing sentiment hours read as `0.0`.
//! - Anomaly flag: whole-series mean and population standard deviation,
//!   strictly greater than two sigma.
//!
//! Examples
//! Switching to live mode and charting a ticker:
//! ```rust,ignore
//! use nexus::{InstrumentId, ProviderMode, ProviderSelector, chart};
//!
//! let mut selector = ProviderSelector::default();
//! let status = selector
//!     .configure_live_checked("http://localhost:8000", "my-key")
//!     .await;
//! if status.is_reachable() {
//!     selector.set_mode(ProviderMode::Live);
//! }
//!
//! let provider = selector.active_provider();
//! let aapl = InstrumentId::new("AAPL")?;
//! let rows = chart::sentiment_price_rows(provider.as_ref(), &aapl).await?;
//! ```
//!
//! See `nexus/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub mod chart;
mod selector;

pub use selector::ProviderSelector;

pub use nexus_live::LiveBackend;
pub use nexus_static::{StaticBackend, StaticDataset};

// Re-export core types for convenience
pub use nexus_core::{
    // Engine
    ANOMALY_SIGMA,
    // Records and rows
    AnalystRating,
    AnomalyRow,
    CorporateEarning,
    // Configuration
    DEFAULT_ENDPOINT_URL,
    // Contract
    DataProvider,
    FusedRow,
    HOURLY_STRIDE,
    HealthStatus,
    InstrumentId,
    MarketObservation,
    NexusError,
    Observation,
    ProviderConfig,
    ProviderMode,
    SentimentObservation,
    SeriesKind,
    SeriesReport,
    SeriesStats,
    flag_anomalies,
    hour_key,
    hourly_join,
};
