//! Report envelopes produced by providers and the selector.

use serde::{Deserialize, Serialize};

use crate::error::NexusError;

/// Fetched rows together with any failure the provider absorbed.
///
/// `data` keeps the plain operation's contract (an absorbed remote failure
/// still yields an empty vector), while `warnings` lets a caller tell
/// "no data" apart from "the source was unreachable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport<T> {
    /// Name of the provider that served the request.
    pub provider: String,
    /// Rows ordered ascending by timestamp.
    pub data: Vec<T>,
    /// Non-fatal issues encountered while fetching.
    pub warnings: Vec<NexusError>,
}

impl<T> SeriesReport<T> {
    /// Report for a fetch that completed without absorbing any failure.
    pub fn ok(provider: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            provider: provider.into(),
            data,
            warnings: vec![],
        }
    }

    /// Report for a fetch whose failure was absorbed into an empty result.
    pub fn degraded(provider: impl Into<String>, warning: NexusError) -> Self {
        Self {
            provider: provider.into(),
            data: vec![],
            warnings: vec![warning],
        }
    }

    /// True when the fetch succeeded; the data may still be empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Drop the warnings and keep only the data.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Outcome of probing a live endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthStatus {
    /// The server answered; any HTTP status counts, including 404.
    Reachable {
        /// HTTP status code of the probe response.
        http_status: u16,
    },
    /// The request never produced a response.
    Unreachable {
        /// Transport error description.
        reason: String,
    },
}

impl HealthStatus {
    /// True when the endpoint produced any HTTP response.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}
