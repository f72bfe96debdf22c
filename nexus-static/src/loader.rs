//! JSON export loading for directory-backed datasets.

use std::path::Path;

use nexus_core::{NexusError, SeriesKind};
use serde::de::DeserializeOwned;

/// File holding one-minute price bars.
pub const MARKET_DATA_FILE: &str = "market_data_1min.json";
/// File holding analyst rating changes.
pub const ANALYST_RATINGS_FILE: &str = "analyst_ratings.json";
/// File holding corporate earnings releases.
pub const CORPORATE_EARNINGS_FILE: &str = "corporate_earnings.json";
/// File holding hourly sentiment features.
pub const SENTIMENT_FILE: &str = "social_hourly_features.json";

/// Read and decode a whole collection.
///
/// A missing or unreadable file, a decode failure, and an empty array are all
/// reported as `DataUnavailable`: an empty export means the dataset was
/// packaged wrong, not that no instrument has data.
pub async fn read_collection<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    kind: SeriesKind,
) -> Result<Vec<T>, NexusError> {
    let path = dir.join(file);
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        NexusError::data_unavailable(kind, format!("cannot read {}: {e}", path.display()))
    })?;
    let rows: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
        NexusError::data_unavailable(kind, format!("cannot decode {}: {e}", path.display()))
    })?;
    if rows.is_empty() {
        return Err(NexusError::data_unavailable(
            kind,
            format!("{} contains no records", path.display()),
        ));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), records = rows.len(), %kind, "loaded static fixture");

    Ok(rows)
}
