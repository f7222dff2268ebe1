//! Daily OHLCV price record.

use chrono::NaiveDate;

/// One trading day. Sequences of records are treated as ascending by date;
/// nothing in the domain enforces that or removes duplicate dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceRecord {
    /// Record where open, high, low and close are all `price`.
    pub fn flat(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            open: price,
            high: price,
            low: price,
            close: price,
            volume,
        }
    }

    /// ISO `YYYY-MM-DD` form of the date.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Closing prices in input order.
pub fn closes(history: &[PriceRecord]) -> Vec<f64> {
    history.iter().map(|r| r.close).collect()
}
