//! RSI (Relative Strength Index) over overlapping windows of close deltas.
//!
//! For each window of n consecutive deltas (step 1):
//! - gains  = sum of positive deltas
//! - losses = sum of |negative deltas|
//!
//! Formula: RSI = 100 - (100 / (1 + gains / losses))
//! If losses == 0: RSI = 100 (a flat window included)
//!
//! Needs more than n + 1 records; output length is len - n.

use crate::domain::error::IndicatorError;
use crate::domain::ohlcv::PriceRecord;

pub fn calculate_rsi(history: &[PriceRecord], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "RSI" });
    }
    if history.len().saturating_sub(1) <= period {
        return Ok(Vec::new());
    }

    let deltas: Vec<f64> = history.windows(2).map(|w| w[1].close - w[0].close).collect();

    Ok(deltas
        .windows(period)
        .map(|window| {
            let (gains, losses) = window.iter().fold((0.0_f64, 0.0_f64), |(g, l), &d| {
                if d > 0.0 {
                    (g + d, l)
                } else if d < 0.0 {
                    (g, l - d)
                } else {
                    (g, l)
                }
            });
            rsi_from_sums(gains, losses)
        })
        .collect())
}

fn rsi_from_sums(gains: f64, losses: f64) -> f64 {
    if losses == 0.0 {
        return 100.0;
    }
    let rs = gains / losses;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_record(date: &str, close: f64) -> PriceRecord {
        PriceRecord::flat(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
            1000,
        )
    }

    fn make_history(prices: &[f64]) -> Vec<PriceRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &close)| make_record(&format!("2024-01-{:02}", i + 1), close))
            .collect()
    }

    #[test]
    fn rsi_empty_history() {
        assert!(calculate_rsi(&[], 14).unwrap().is_empty());
    }

    #[test]
    fn rsi_needs_more_than_period_plus_one() {
        let history = make_history(&[1.0, 2.0, 3.0, 4.0]);
        assert!(calculate_rsi(&history, 3).unwrap().is_empty());

        let history = make_history(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(calculate_rsi(&history, 3).unwrap().len(), 2);
    }

    #[test]
    fn rsi_output_length() {
        let history = make_history(&(0..20).map(|i| (i % 4) as f64).collect::<Vec<_>>());
        assert_eq!(calculate_rsi(&history, 14).unwrap().len(), 20 - 14);
    }

    #[test]
    fn rsi_all_gains_no_losses() {
        let history = make_history(&(0..16).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let series = calculate_rsi(&history, 14).unwrap();
        assert!(series.iter().all(|&v| v == 100.0));
    }

    #[test]
    fn rsi_all_losses_no_gains() {
        let history = make_history(&(0..16).map(|i| 100.0 - i as f64).collect::<Vec<_>>());
        let series = calculate_rsi(&history, 14).unwrap();
        assert!(!series.is_empty());
        assert!(series.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rsi_flat_window_is_100() {
        let history = make_history(&[50.0; 6]);
        let series = calculate_rsi(&history, 3).unwrap();
        assert_eq!(series, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn rsi_known_window() {
        // deltas: +2, -1, +3, -2
        let history = make_history(&[10.0, 12.0, 11.0, 14.0, 12.0]);
        let series = calculate_rsi(&history, 3).unwrap();

        // window [+2, -1, +3]: gains 5, losses 1
        assert_relative_eq!(series[0], 100.0 - 100.0 / (1.0 + 5.0));
        // window [-1, +3, -2]: gains 3, losses 3
        assert_relative_eq!(series[1], 50.0);
    }

    #[test]
    fn rsi_windows_overlap() {
        // a single large drop only affects the windows that contain it
        let history = make_history(&[10.0, 11.0, 12.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let series = calculate_rsi(&history, 2).unwrap();
        assert_eq!(series.len(), 6);
        assert!(series[0] == 100.0);
        assert!(series[1] < 100.0);
        assert!(series[2] < 100.0);
        assert!(series[3..].iter().all(|&v| v == 100.0));
    }

    #[test]
    fn rsi_in_range() {
        let history = make_history(
            &(1..=30)
                .map(|i| 100.0 + (i as f64 % 7.0 - 3.0) * 2.0)
                .collect::<Vec<_>>(),
        );
        for rsi in calculate_rsi(&history, 14).unwrap() {
            assert!((0.0..=100.0).contains(&rsi), "RSI {} out of range", rsi);
        }
    }

    #[test]
    fn rsi_huge_period_is_empty() {
        assert!(calculate_rsi(&[], usize::MAX).unwrap().is_empty());
        let history = make_history(&[1.0, 2.0, 3.0]);
        assert!(calculate_rsi(&history, usize::MAX).unwrap().is_empty());
    }

    #[test]
    fn rsi_zero_period_rejected() {
        let history = make_history(&[1.0, 2.0, 3.0]);
        assert_eq!(
            calculate_rsi(&history, 0),
            Err(IndicatorError::InvalidPeriod { indicator: "RSI" })
        );
    }
}
