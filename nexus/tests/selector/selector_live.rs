use httpmock::prelude::*;
use nexus::{HealthStatus, ProviderMode, ProviderSelector};
use serde_json::json;

use crate::helpers::{AAPL, id};

fn bar(minute: u32, close: f64) -> serde_json::Value {
    json!({
        "Timestamp": format!("2024-01-02 14:{minute:02}:00"),
        "Ticker": "AAPL",
        "Open": close, "High": close, "Low": close, "Close": close,
        "Volume": 10
    })
}

#[tokio::test]
async fn live_mode_uses_latest_saved_config() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/market-data/AAPL")
                .header("X-API-Key", "fresh");
            then.status(200).json_body(json!([bar(30, 1.0)]));
        })
        .await;

    let mut selector = ProviderSelector::default();
    selector.configure_live("http://127.0.0.1:1", "stale");
    selector.configure_live(server.base_url(), "fresh");
    selector.set_mode(ProviderMode::Live);

    let rows = selector
        .active_provider()
        .market_data(&id(AAPL))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn reconfiguring_does_not_mutate_existing_handles() {
    let server_a = MockServer::start_async().await;
    let mock_a = server_a
        .mock_async(|when, then| {
            when.path("/api/v1/market-data/AAPL").header("X-API-Key", "key-a");
            then.status(200).json_body(json!([bar(30, 1.0)]));
        })
        .await;
    let server_b = MockServer::start_async().await;
    let mock_b = server_b
        .mock_async(|when, then| {
            when.path("/api/v1/market-data/AAPL").header("X-API-Key", "key-b");
            then.status(200).json_body(json!([bar(30, 2.0), bar(31, 2.5)]));
        })
        .await;

    let mut selector = ProviderSelector::default().with_mode(ProviderMode::Live);
    selector.configure_live(server_a.base_url(), "key-a");
    let old_handle = selector.active_provider();
    let generation_at_fetch = selector.config_generation();

    selector.configure_live(server_b.base_url(), "key-b");
    assert_ne!(selector.config_generation(), generation_at_fetch);

    let old_rows = old_handle.market_data(&id(AAPL)).await.unwrap();
    let new_rows = selector
        .active_provider()
        .market_data(&id(AAPL))
        .await
        .unwrap();

    mock_a.assert_async().await;
    mock_b.assert_async().await;
    assert_eq!(old_rows.len(), 1);
    assert_eq!(new_rows.len(), 2);
}

#[tokio::test]
async fn live_outage_yields_empty_rows_not_errors() {
    let mut selector = ProviderSelector::default().with_mode(ProviderMode::Live);
    selector.configure_live("http://127.0.0.1:1", "k");

    let provider = selector.active_provider();
    assert!(provider.market_data(&id(AAPL)).await.unwrap().is_empty());
    assert!(provider.social_sentiment(&id(AAPL)).await.unwrap().is_empty());
}

#[tokio::test]
async fn checked_configure_reports_reachable_endpoint() {
    let server = MockServer::start_async().await;
    let probe = server
        .mock_async(|when, then| {
            when.method(GET).path("/health").header("X-API-Key", "k");
            then.status(200).json_body(json!({"status": "ok"}));
        })
        .await;

    let mut selector = ProviderSelector::default();
    let status = selector.configure_live_checked(server.base_url(), "k").await;

    probe.assert_async().await;
    assert_eq!(status, HealthStatus::Reachable { http_status: 200 });
    assert_eq!(selector.mode(), ProviderMode::Demo);
}

#[tokio::test]
async fn checked_configure_keeps_config_when_probe_fails() {
    let mut selector = ProviderSelector::default();
    let status = selector
        .configure_live_checked("http://127.0.0.1:1", "later")
        .await;

    assert!(!status.is_reachable());
    assert_eq!(selector.config().endpoint_url, "http://127.0.0.1:1");
    assert_eq!(selector.config().api_key, "later");
    assert_eq!(selector.config_generation(), 1);
    assert_eq!(selector.mode(), ProviderMode::Demo);
}

#[tokio::test]
async fn probe_without_saving() {
    let selector = ProviderSelector::default().with_config(nexus::ProviderConfig::new(
        "http://127.0.0.1:1",
        "k",
    ));
    let status = selector.probe_live().await;
    assert!(matches!(status, HealthStatus::Unreachable { .. }));
    assert_eq!(selector.config_generation(), 0);
}

#[tokio::test]
async fn live_handles_and_probes_use_the_selector_client() {
    let server = MockServer::start_async().await;
    let data = server
        .mock_async(|when, then| {
            when.path("/api/v1/market-data/AAPL")
                .header("user-agent", "nexus-dashboard/1");
            then.status(200).json_body(json!([bar(30, 1.0)]));
        })
        .await;
    let probe = server
        .mock_async(|when, then| {
            when.path("/health").header("user-agent", "nexus-dashboard/1");
            then.status(200);
        })
        .await;

    let client = reqwest::Client::builder()
        .user_agent("nexus-dashboard/1")
        .build()
        .unwrap();
    let mut selector = ProviderSelector::default()
        .with_http_client(client)
        .with_mode(ProviderMode::Live);

    let status = selector.configure_live_checked(server.base_url(), "k").await;
    let rows = selector
        .active_provider()
        .market_data(&id(AAPL))
        .await
        .unwrap();

    probe.assert_async().await;
    data.assert_async().await;
    assert!(status.is_reachable());
    assert_eq!(rows.len(), 1);
}
