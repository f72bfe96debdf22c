//! Fetch-and-fuse helpers that feed the two chart shapes.
//!
//! Both helpers take whatever handle the selector returned and never look at
//! which backend it is.

use futures::future::try_join;
use nexus_core::{
    AnomalyRow, DataProvider, FusedRow, InstrumentId, NexusError, SeriesReport, flag_anomalies,
    hourly_join,
};

/// Price and sentiment for `instrument`, aligned one row per hour.
///
/// Market and sentiment data are requested concurrently from the same
/// handle. A provider error (static `DataUnavailable`) is returned as is; a
/// live outage arrives as empty series and therefore as an empty result.
///
/// # Errors
/// Returns the first error reported by either fetch.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "nexus::chart::sentiment_price_rows",
        skip_all,
        fields(provider = provider.name(), instrument = %instrument),
    )
)]
pub async fn sentiment_price_rows(
    provider: &dyn DataProvider,
    instrument: &InstrumentId,
) -> Result<Vec<FusedRow>, NexusError> {
    let (prices, sentiment) = try_join(
        provider.market_data(instrument),
        provider.social_sentiment(instrument),
    )
    .await?;
    Ok(hourly_join(&prices, &sentiment))
}

/// Like [`sentiment_price_rows`] but keeps any failure the provider absorbed.
///
/// # Errors
/// Returns the first error reported by either fetch.
pub async fn sentiment_price_report(
    provider: &dyn DataProvider,
    instrument: &InstrumentId,
) -> Result<SeriesReport<FusedRow>, NexusError> {
    let (prices, sentiment) = try_join(
        provider.market_data_report(instrument),
        provider.social_sentiment_report(instrument),
    )
    .await?;
    let mut report = SeriesReport::ok(
        prices.provider.clone(),
        hourly_join(&prices.data, &sentiment.data),
    );
    report.warnings.extend(prices.warnings);
    report.warnings.extend(sentiment.warnings);
    Ok(report)
}

/// Closing prices for `instrument` with outliers flagged.
///
/// # Errors
/// Returns the provider's error unchanged.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "nexus::chart::price_anomaly_rows",
        skip_all,
        fields(provider = provider.name(), instrument = %instrument),
    )
)]
pub async fn price_anomaly_rows(
    provider: &dyn DataProvider,
    instrument: &InstrumentId,
) -> Result<Vec<AnomalyRow>, NexusError> {
    let prices = provider.market_data(instrument).await?;
    Ok(flag_anomalies(&prices))
}

/// Like [`price_anomaly_rows`] but keeps any failure the provider absorbed.
///
/// # Errors
/// Returns the provider's error unchanged.
pub async fn price_anomaly_report(
    provider: &dyn DataProvider,
    instrument: &InstrumentId,
) -> Result<SeriesReport<AnomalyRow>, NexusError> {
    let prices = provider.market_data_report(instrument).await?;
    Ok(SeriesReport {
        data: flag_anomalies(&prices.data),
        provider: prices.provider,
        warnings: prices.warnings,
    })
}
