use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SeriesKind;

/// Unified error type for the nexus workspace.
///
/// Local packaging problems (`DataUnavailable`) are fatal to the call that hit
/// them. Remote failures (`RemoteFetchFailed`) are absorbed by the live backend
/// and only ever reach callers as report warnings.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NexusError {
    /// A static fixture is missing or corrupt.
    #[error("data unavailable for {kind}: {reason}")]
    DataUnavailable {
        /// Series whose fixture failed to load.
        kind: SeriesKind,
        /// Human-readable cause (missing file, decode failure, ...).
        reason: String,
    },

    /// A live request failed in transport or returned a non-success status.
    #[error("remote fetch failed for {kind}: {msg}")]
    RemoteFetchFailed {
        /// Series that was requested.
        kind: SeriesKind,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A record could not be decoded.
    #[error("data issue: {0}")]
    Data(String),
}

impl NexusError {
    /// Helper: build a `DataUnavailable` error for a series kind.
    pub fn data_unavailable(kind: SeriesKind, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            kind,
            reason: reason.into(),
        }
    }

    /// Helper: build a `RemoteFetchFailed` error for a series kind.
    pub fn remote(kind: SeriesKind, msg: impl Into<String>) -> Self {
        Self::RemoteFetchFailed {
            kind,
            msg: msg.into(),
        }
    }

    /// True when the error was produced by the remote data service path.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteFetchFailed { .. })
    }
}
