mod common;
use nexus::{InstrumentId, chart};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();
    let selector = common::selector_from_env().await;
    let provider = selector.active_provider();

    for sym in ["AAPL", "MSFT", "NVDA"] {
        let id = InstrumentId::new(sym)?;

        // Report variant: an absorbed live failure shows up as a warning.
        let report = chart::price_anomaly_report(provider.as_ref(), &id).await?;
        for w in &report.warnings {
            println!("{sym}: warning from {}: {w}", report.provider);
        }

        let flagged: Vec<_> = report.data.iter().filter(|r| r.is_anomaly()).collect();
        println!("{sym}: {} points, {} flagged", report.data.len(), flagged.len());
        for r in flagged {
            println!("  {} close={:.2}", r.observation.timestamp, r.observation.close);
        }
    }

    Ok(())
}
