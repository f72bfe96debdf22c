use nexus_core::AnalystRating;

use super::utc;

type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
);

pub fn all() -> Vec<AnalystRating> {
    const ROWS: &[Row] = &[
        ("R-0001", "AAPL", "2023-12-14 12:05:00", "J. Ortega", "Harbor Securities", "Hold", "Buy", 190.0, 215.0),
        ("R-0002", "AAPL", "2024-01-02 13:40:00", "M. Chen", "Northgate Capital", "Buy", "Buy", 205.0, 210.0),
        ("R-0003", "MSFT", "2023-12-20 09:15:00", "A. Patel", "Harbor Securities", "Buy", "Strong Buy", 400.0, 430.0),
        ("R-0004", "NVDA", "2023-11-30 15:30:00", "S. Novak", "Larkspur Research", "Hold", "Sell", 520.0, 450.0),
        ("R-0005", "NVDA", "2024-01-02 16:10:00", "M. Chen", "Northgate Capital", "Sell", "Hold", 450.0, 500.0),
    ];
    ROWS.iter()
        .map(|&(id, sym, ts, analyst, brokerage, prev, new, prev_pt, new_pt)| AnalystRating {
            rating_id: id.to_string(),
            instrument_id: sym.to_string(),
            timestamp: utc(ts),
            analyst_name: analyst.to_string(),
            brokerage_name: brokerage.to_string(),
            previous_rating: prev.to_string(),
            new_rating: new.to_string(),
            previous_price_target: prev_pt,
            new_price_target: new_pt,
        })
        .collect()
}
