use nexus::{NexusError, ProviderMode, ProviderSelector, chart};

use crate::helpers::{AAPL, CountingProvider, at, id, minute_bars, sentiment};

#[tokio::test]
async fn two_hours_of_minutes_make_two_rows() {
    let closes: Vec<f64> = (0..120).map(|i| 100.0 + f64::from(i)).collect();
    let provider = CountingProvider::new(
        minute_bars(AAPL, at(2024, 3, 4, 10, 0), &closes),
        vec![
            sentiment(AAPL, at(2024, 3, 4, 10, 0), 5.0, 0.1),
            sentiment(AAPL, at(2024, 3, 4, 11, 0), 7.0, -0.2),
        ],
    );

    let rows = chart::sentiment_price_rows(&provider, &id(AAPL))
        .await
        .unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].time_bucket_label, "2024-03-04 10:00");
    assert_eq!(rows[0].price, 100.0);
    assert_eq!(rows[0].sentiment_volume, 5.0);
    assert_eq!(rows[0].sentiment_divergence, 0.1);
    assert_eq!(rows[1].time_bucket_label, "2024-03-04 11:00");
    assert_eq!(rows[1].price, 160.0);
    assert_eq!(rows[1].sentiment_volume, 7.0);
    assert_eq!(rows[1].sentiment_divergence, -0.2);
}

#[tokio::test]
async fn sentiment_failure_fails_the_chart() {
    let provider = CountingProvider::new(
        minute_bars(AAPL, at(2024, 3, 4, 10, 0), &[1.0, 2.0]),
        vec![],
    )
    .failing_sentiment();

    let err = chart::sentiment_price_rows(&provider, &id(AAPL))
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::DataUnavailable { .. }));
}

#[tokio::test]
async fn one_outlier_is_flagged() {
    let mut closes = vec![10.0; 20];
    closes.push(50.0);
    let provider = CountingProvider::new(minute_bars(AAPL, at(2024, 3, 4, 10, 0), &closes), vec![]);

    let rows = chart::price_anomaly_rows(&provider, &id(AAPL))
        .await
        .unwrap();
    assert_eq!(rows.len(), 21);
    assert!(rows[..20].iter().all(|r| r.anomaly_value.is_none()));
    assert_eq!(rows[20].anomaly_value, Some(50.0));
}

#[tokio::test]
async fn live_outage_is_visible_in_reports() {
    let mut selector = ProviderSelector::default().with_mode(ProviderMode::Live);
    selector.configure_live("http://127.0.0.1:1", "k");
    let provider = selector.active_provider();

    let fused = chart::sentiment_price_report(provider.as_ref(), &id(AAPL))
        .await
        .unwrap();
    assert!(fused.data.is_empty());
    assert_eq!(fused.provider, "nexus-live");
    assert_eq!(fused.warnings.len(), 2);
    assert!(fused.warnings.iter().all(NexusError::is_remote));

    let anomalies = chart::price_anomaly_report(provider.as_ref(), &id(AAPL))
        .await
        .unwrap();
    assert!(anomalies.data.is_empty());
    assert!(!anomalies.is_complete());
}

#[tokio::test]
async fn demo_reports_are_complete() {
    let provider = ProviderSelector::default().active_provider();
    let report = chart::sentiment_price_report(provider.as_ref(), &id(AAPL))
        .await
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.data.len(), 3);
    assert_eq!(report.provider, "nexus-static");
}
