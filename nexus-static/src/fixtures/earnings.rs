use nexus_core::CorporateEarning;

use super::utc;

pub fn all() -> Vec<CorporateEarning> {
    vec![
        build("E-0001", "AAPL", "2023-11-02 20:30:00", "Q4 2023", (1.46, 1.39), (89.5e9, 89.3e9), 0.42),
        build("E-0002", "AAPL", "2023-08-03 20:30:00", "Q3 2023", (1.26, 1.19), (81.8e9, 81.7e9), 0.18),
        build("E-0003", "MSFT", "2023-10-24 20:05:00", "Q1 2024", (2.99, 2.65), (56.5e9, 54.5e9), 1.87),
        build("E-0004", "NVDA", "2023-11-21 21:20:00", "Q3 2024", (4.02, 3.37), (18.1e9, 16.2e9), 2.41),
    ]
}

fn build(
    id: &str,
    symbol: &str,
    released: &str,
    quarter: &str,
    eps: (f64, f64),
    revenue: (f64, f64),
    revenue_z: f64,
) -> CorporateEarning {
    CorporateEarning {
        earning_id: id.to_string(),
        instrument_id: symbol.to_string(),
        release_timestamp: utc(released),
        fiscal_quarter: quarter.to_string(),
        eps_actual: eps.0,
        eps_consensus: eps.1,
        revenue_actual: revenue.0,
        revenue_consensus: revenue.1,
        surprise_eps: ((eps.0 - eps.1) * 100.0).round() / 100.0,
        surprise_revenue_zscore: revenue_z,
    }
}
