use nexus::{ProviderMode, ProviderSelector};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Demo selector, switched to live when `NEXUS_API_URL` is set and answers.
pub async fn selector_from_env() -> ProviderSelector {
    let mut selector = ProviderSelector::default();
    let Ok(url) = std::env::var("NEXUS_API_URL") else {
        println!("--- (NEXUS_API_URL not set; using bundled demo data) ---");
        return selector;
    };
    let key = std::env::var("NEXUS_API_KEY").unwrap_or_default();

    let status = selector.configure_live_checked(url, key).await;
    if status.is_reachable() {
        selector.set_mode(ProviderMode::Live);
    } else {
        println!("--- (live endpoint unreachable: {status:?}; staying in demo mode) ---");
    }
    selector
}
