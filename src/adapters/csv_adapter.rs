//! CSV file price history adapter.
//!
//! One file per code: `<base>/<CODE>.csv` with header
//! `date,open,high,low,close,volume`.

use crate::domain::error::PricetaError;
use crate::domain::ohlcv::PriceRecord;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", code))
    }
}

fn field<T: FromStr>(record: &csv::StringRecord, idx: usize, name: &str) -> Result<T, PricetaError>
where
    T::Err: std::fmt::Display,
{
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    record
        .get(idx)
        .ok_or_else(|| PricetaError::Data {
            reason: format!("line {}: missing {} column", line, name),
        })?
        .parse()
        .map_err(|e| PricetaError::Data {
            reason: format!("line {}: invalid {} value: {}", line, name, e),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_history(
        &self,
        code: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PriceRecord>, PricetaError> {
        let path = self.csv_path(code);
        let content = fs::read_to_string(&path).map_err(|e| PricetaError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut history = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| PricetaError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str: String = field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                PricetaError::Data {
                    reason: format!("invalid date {:?}: {}", date_str, e),
                }
            })?;

            if start_date.is_some_and(|s| date < s) || end_date.is_some_and(|e| date > e) {
                continue;
            }

            history.push(PriceRecord {
                date,
                open: field(&record, 1, "open")?,
                high: field(&record, 2, "high")?,
                low: field(&record, 3, "low")?,
                close: field(&record, 4, "close")?,
                volume: field(&record, 5, "volume")?,
            });
        }

        // stable: records sharing a date keep their file order
        history.sort_by_key(|r| r.date);
        debug!("read {} records from {}", history.len(), path.display());
        Ok(history)
    }

    fn list_codes(&self) -> Result<Vec<String>, PricetaError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| PricetaError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut codes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PricetaError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            if let Some(code) = name.to_string_lossy().strip_suffix(".csv") {
                codes.push(code.to_string());
            }
        }

        codes.sort();
        Ok(codes)
    }
}
