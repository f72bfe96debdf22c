//! Re-export of foundational types from `nexus-types`.
// Consolidated re-exports so downstream crates can depend on `nexus-core` only

pub use nexus_types::observation::wire_ts;
pub use nexus_types::{
    AnalystRating, AnomalyRow, CorporateEarning, DEFAULT_ENDPOINT_URL, FusedRow, HealthStatus,
    MarketObservation, NexusError, Observation, ProviderConfig, ProviderMode,
    SentimentObservation, SeriesKind, SeriesReport,
};
