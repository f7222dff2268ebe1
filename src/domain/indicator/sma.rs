//! Simple Moving Average of closing prices.
//!
//! Mean of each sliding window of n closes (step 1).
//! Output length len - n + 1, or empty when len < n.

use crate::domain::error::IndicatorError;
use crate::domain::ohlcv::PriceRecord;

pub fn calculate_sma(history: &[PriceRecord], window: usize) -> Result<Vec<f64>, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "SMA" });
    }
    if history.len() < window {
        return Ok(Vec::new());
    }

    Ok(history
        .windows(window)
        .map(|w| w.iter().map(|r| r.close).sum::<f64>() / window as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_history(prices: &[f64]) -> Vec<PriceRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000,
            })
            .collect()
    }

    #[test]
    fn sma_hand_computed_windows() {
        let history = make_history(&[103.0, 106.0, 105.0, 102.0, 101.0]);
        let series = calculate_sma(&history, 3).unwrap();

        assert_eq!(series.len(), 3);
        assert_relative_eq!(series[0], (103.0 + 106.0 + 105.0) / 3.0);
        assert_relative_eq!(series[1], (106.0 + 105.0 + 102.0) / 3.0);
        assert_relative_eq!(series[2], (105.0 + 102.0 + 101.0) / 3.0);
    }

    #[test]
    fn sma_uses_close_only() {
        let mut history = make_history(&[10.0, 20.0]);
        history[0].high = 1_000.0;
        history[1].open = 0.0;
        assert_eq!(calculate_sma(&history, 2).unwrap(), vec![15.0]);
    }

    #[test]
    fn sma_window_equal_to_length() {
        let history = make_history(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(calculate_sma(&history, 4).unwrap(), vec![2.5]);
    }

    #[test]
    fn sma_insufficient_data_is_empty() {
        let history = make_history(&[1.0, 2.0]);
        assert!(calculate_sma(&history, 3).unwrap().is_empty());
        assert!(calculate_sma(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn sma_window_1_is_closes() {
        let history = make_history(&[5.0, 6.0, 7.0]);
        assert_eq!(calculate_sma(&history, 1).unwrap(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn sma_window_0_rejected() {
        let history = make_history(&[1.0]);
        assert!(matches!(
            calculate_sma(&history, 0),
            Err(IndicatorError::InvalidPeriod { indicator: "SMA" })
        ));
    }
}
