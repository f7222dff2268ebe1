#![allow(dead_code)]

use chrono::NaiveDate;
use priceta::domain::error::PricetaError;
pub use priceta::domain::ohlcv::PriceRecord;
use priceta::ports::data_port::DataPort;
use std::cell::RefCell;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceRecord>>,
    pub errors: HashMap<String, String>,
    pub requests: RefCell<Vec<(String, Option<NaiveDate>, Option<NaiveDate>)>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_history(mut self, code: &str, history: Vec<PriceRecord>) -> Self {
        self.data.insert(code.to_string(), history);
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_history(
        &self,
        code: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PriceRecord>, PricetaError> {
        self.requests
            .borrow_mut()
            .push((code.to_string(), start_date, end_date));
        if let Some(reason) = self.errors.get(code) {
            return Err(PricetaError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(code).cloned().unwrap_or_default())
    }

    fn list_codes(&self) -> Result<Vec<String>, PricetaError> {
        let mut codes: Vec<String> = self.data.keys().cloned().collect();
        codes.sort();
        Ok(codes)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_record(date: &str, close: f64) -> PriceRecord {
    PriceRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume: 1000,
    }
}

/// One record per consecutive day with the given closes.
pub fn history_from_closes(start_date: &str, closes: &[f64]) -> Vec<PriceRecord> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceRecord {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000 + i as u64,
        })
        .collect()
}

/// `count` closes starting at `start_price`, changing by `step` each day.
pub fn generate_history(start_date: &str, count: usize, start_price: f64, step: f64) -> Vec<PriceRecord> {
    let closes: Vec<f64> = (0..count).map(|i| start_price + step * i as f64).collect();
    history_from_closes(start_date, &closes)
}

pub fn write_csv(dir: &std::path::Path, code: &str, history: &[PriceRecord]) {
    let mut content = String::from("date,open,high,low,close,volume\n");
    for r in history {
        content.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.date, r.open, r.high, r.low, r.close, r.volume
        ));
    }
    std::fs::write(dir.join(format!("{}.csv", code)), content).unwrap();
}
