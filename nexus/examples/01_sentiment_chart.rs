mod common;
use nexus::{InstrumentId, chart};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();

    // 1. Build a selector (live when NEXUS_API_URL is set and reachable).
    let selector = common::selector_from_env().await;

    // 2. Ask for the active provider; the chart code never checks which one it is.
    let provider = selector.active_provider();
    let aapl = InstrumentId::new("AAPL")?;

    // 3. Fetch price and sentiment concurrently and align them per hour.
    let rows = chart::sentiment_price_rows(provider.as_ref(), &aapl).await?;

    // 4. Print the chart data. A zero volume means "no sentiment for that hour".
    println!("{:<18} {:>10} {:>10} {:>10}", "bucket", "price", "volume", "diverg.");
    for r in &rows {
        println!(
            "{:<18} {:>10.2} {:>10.1} {:>10.2}",
            r.time_bucket_label, r.price, r.sentiment_volume, r.sentiment_divergence
        );
    }

    Ok(())
}
