//! Exponential Moving Average.
//!
//! k = 2/(n+1), seed with the SMA of the first n values, then
//! EMA[i] = (V[i] - EMA[i-1]) * k + EMA[i-1].
//! Output starts at the seed: length len - n + 1.

use crate::domain::error::IndicatorError;

pub fn calculate_ema(prices: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "EMA" });
    }
    if prices.len() < period {
        return Ok(Vec::new());
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = prices[..period].iter().sum::<f64>() / period as f64;

    let mut values = Vec::with_capacity(prices.len() - period + 1);
    values.push(ema);

    // Sequential: each value depends on the previous one.
    for &price in &prices[period..] {
        ema = (price - ema) * k + ema;
        values.push(ema);
    }

    Ok(values)
}
