use nexus::{InstrumentId, ProviderMode, ProviderSelector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut selector = ProviderSelector::default();
    let aapl = InstrumentId::new("AAPL")?;

    // Demo mode: bundled fixtures.
    let demo = selector.active_provider();
    println!("{}: {} bars", demo.name(), demo.market_data(&aapl).await?.len());

    // Save a live config and probe it; the config is kept even if the probe fails.
    let status = selector
        .configure_live_checked("http://localhost:8000", "demo-key")
        .await;
    println!("probe: {status:?} (config generation {})", selector.config_generation());

    // Live mode: an unreachable service degrades to empty data.
    selector.set_mode(ProviderMode::Live);
    let live = selector.active_provider();
    let report = live.market_data_report(&aapl).await?;
    println!(
        "{}: {} bars, complete={}",
        report.provider,
        report.data.len(),
        report.is_complete()
    );

    // The demo handle obtained earlier still serves fixtures.
    println!("{}: {} bars", demo.name(), demo.market_data(&aapl).await?.len());
    Ok(())
}
