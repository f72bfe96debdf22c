use nexus_core::SentimentObservation;

use super::utc;

pub fn all() -> Vec<SentimentObservation> {
    let mut out = Vec::new();
    out.extend(build(
        "AAPL",
        &[
            ("2024-01-02 14:00:00", 180.0, "Stable", 0.05),
            ("2024-01-02 15:00:00", 420.0, "Rising", 0.32),
            ("2024-01-02 16:00:00", 510.0, "Surging", 0.47),
            ("2024-01-02 17:00:00", 260.0, "Falling", -0.12),
        ],
    ));
    out.extend(build(
        "MSFT",
        &[
            ("2024-01-02 14:00:00", 95.0, "Stable", -0.02),
            ("2024-01-02 15:00:00", 130.0, "Rising", 0.11),
            ("2024-01-02 16:00:00", 88.0, "Falling", -0.21),
        ],
    ));
    out.extend(build(
        "NVDA",
        &[
            ("2024-01-02 15:00:00", 760.0, "Surging", 0.58),
            ("2024-01-02 16:00:00", 640.0, "Stable", 0.22),
            ("2024-01-02 17:00:00", 300.0, "Falling", -0.35),
        ],
    ));
    out
}

fn build(symbol: &str, rows: &[(&str, f64, &str, f64)]) -> Vec<SentimentObservation> {
    rows.iter()
        .map(|&(ts, volume, velocity, divergence)| SentimentObservation {
            timestamp: utc(ts),
            instrument_id: symbol.to_string(),
            social_volume: volume,
            velocity_label: velocity.to_string(),
            sentiment_divergence: divergence,
        })
        .collect()
}
