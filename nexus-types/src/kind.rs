//! Series kinds served by a data provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One provider operation per series kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Fine-grained OHLCV price bars.
    Market,
    /// Analyst rating changes.
    AnalystRatings,
    /// Corporate earnings releases.
    CorporateEarnings,
    /// Hourly social sentiment features.
    Sentiment,
}

impl SeriesKind {
    /// Stable label used in errors and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::AnalystRatings => "analyst_ratings",
            Self::CorporateEarnings => "corporate_earnings",
            Self::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
