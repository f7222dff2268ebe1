//! Price history source port trait.

use crate::domain::error::PricetaError;
use crate::domain::ohlcv::PriceRecord;
use chrono::NaiveDate;

pub trait DataPort {
    /// Records for `code` within the inclusive date bounds, ascending by date.
    fn fetch_history(
        &self,
        code: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<PriceRecord>, PricetaError>;

    fn list_codes(&self) -> Result<Vec<String>, PricetaError>;
}
