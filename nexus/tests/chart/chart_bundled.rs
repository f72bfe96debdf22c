use nexus::{NexusError, ProviderSelector, SeriesKind, StaticBackend, chart};

use crate::helpers::{AAPL, id};

#[tokio::test]
async fn bundled_sentiment_price_rows() {
    let provider = ProviderSelector::default().active_provider();
    let rows = chart::sentiment_price_rows(provider.as_ref(), &id(AAPL))
        .await
        .unwrap();

    let labels: Vec<&str> = rows.iter().map(|r| r.time_bucket_label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2024-01-02 14:30", "2024-01-02 15:30", "2024-01-02 16:30"]
    );
    let volumes: Vec<f64> = rows.iter().map(|r| r.sentiment_volume).collect();
    assert_eq!(volumes, vec![180.0, 420.0, 510.0]);
    assert_eq!(rows[2].sentiment_divergence, 0.47);
}

#[tokio::test]
async fn bundled_price_anomaly_rows_flag_the_spike() {
    let provider = ProviderSelector::default().active_provider();
    for sym in nexus_static::BUNDLED_SYMBOLS {
        let rows = chart::price_anomaly_rows(provider.as_ref(), &id(sym))
            .await
            .unwrap();
        assert_eq!(rows.len(), nexus_static::BUNDLED_BARS);
        let flagged: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.is_anomaly().then_some(i))
            .collect();
        assert_eq!(flagged, vec![nexus_static::BUNDLED_SPIKE_INDEX], "{sym}");
        let spike = &rows[nexus_static::BUNDLED_SPIKE_INDEX];
        assert_eq!(spike.anomaly_value, Some(spike.observation.close));
    }
}

#[tokio::test]
async fn unknown_instrument_charts_nothing() {
    let provider = ProviderSelector::default().active_provider();
    let zzz = id("ZZZZ");
    assert!(
        chart::sentiment_price_rows(provider.as_ref(), &zzz)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        chart::price_anomaly_rows(provider.as_ref(), &zzz)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn missing_fixtures_propagate_data_unavailable() {
    let selector = ProviderSelector::new(StaticBackend::from_dir("/no/such/fixture/dir"));
    let provider = selector.active_provider();

    let err = chart::price_anomaly_rows(provider.as_ref(), &id(AAPL))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        NexusError::DataUnavailable {
            kind: SeriesKind::Market,
            ..
        }
    ));
    assert!(
        chart::sentiment_price_rows(provider.as_ref(), &id(AAPL))
            .await
            .is_err()
    );
}
