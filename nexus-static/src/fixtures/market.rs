use chrono::Duration;
use nexus_core::MarketObservation;

use super::utc;

/// Bars per instrument: three hours of one-minute data.
pub const BARS: usize = 180;

/// Index of the injected price spike in every bundled series.
pub const SPIKE_INDEX: usize = 97;

pub fn all() -> Vec<MarketObservation> {
    let mut out = Vec::with_capacity(BARS * 3);
    out.extend(build("AAPL", 185.0, 0.6, 0.004));
    out.extend(build("MSFT", 372.0, 1.1, -0.002));
    out.extend(build("NVDA", 495.0, 2.4, 0.011));
    out
}

fn build(symbol: &str, base: f64, amplitude: f64, drift: f64) -> Vec<MarketObservation> {
    let start = utc("2024-01-02 14:30:00");
    let mut prev_close = base;
    (0..BARS)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            let mut close = base + amplitude * (x / 9.0).sin() + drift * x;
            if i == SPIKE_INDEX {
                close *= 1.06;
            }
            let open = prev_close;
            prev_close = close;
            let wick = amplitude * 0.15;
            MarketObservation {
                timestamp: start + Duration::minutes(i as i64),
                instrument_id: symbol.to_string(),
                open: round2(open),
                high: round2(open.max(close) + wick),
                low: round2(open.min(close) - wick),
                close: round2(close),
                volume: f64::from(10_000 + (i as u32 * 7_919) % 5_000),
            }
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
