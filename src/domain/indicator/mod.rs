//! Technical indicator implementations.
//!
//! Every indicator is a pure function of an ordered price history (or a
//! plain value sequence for EMA) and returns a `Vec<f64>` aligned to a
//! suffix of the input: the leading warm-up records have no value. A
//! history too short for the requested period yields an empty series, not
//! an error. Only a zero period is rejected, with [`IndicatorError`].
//!
//! - `IndicatorType`: indicator identity + parameters (serves as HashMap key)
//! - `IndicatorOutput`: single series or the MACD triple
//! - `compute_indicators`: evaluate a batch of indicator requests

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::calculate_ema;
pub use macd::{calculate_macd, calculate_macd_default, MacdSeries};
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;

use crate::domain::error::IndicatorError;
use crate::domain::ohlcv::{closes, PriceRecord};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    Macd {
        fast: usize,
        slow: usize,
        signal: usize,
    },
}

impl IndicatorType {
    /// Smallest history length that produces at least one value.
    /// For MACD this is the length needed for a non-empty signal line.
    pub fn min_history(&self) -> usize {
        match *self {
            IndicatorType::Sma(n) | IndicatorType::Ema(n) => n,
            IndicatorType::Rsi(n) => n.saturating_add(2),
            IndicatorType::Macd { fast, slow, signal } => {
                fast.max(slow).saturating_add(signal.saturating_sub(1))
            }
        }
    }

    /// Leading records of the history that carry no value. For MACD this
    /// is the warm-up of the line, i.e. of the slower EMA.
    pub fn warmup(&self) -> usize {
        match *self {
            IndicatorType::Sma(n) | IndicatorType::Ema(n) => n.saturating_sub(1),
            IndicatorType::Rsi(n) => n,
            IndicatorType::Macd { fast, slow, .. } => fast.max(slow).saturating_sub(1),
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA({})", period),
            IndicatorType::Ema(period) => write!(f, "EMA({})", period),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
            IndicatorType::Macd { fast, slow, signal } => {
                write!(f, "MACD({},{},{})", fast, slow, signal)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput {
    Simple(Vec<f64>),
    Macd(MacdSeries),
}

impl IndicatorOutput {
    pub fn is_empty(&self) -> bool {
        match self {
            IndicatorOutput::Simple(values) => values.is_empty(),
            IndicatorOutput::Macd(macd) => macd.line.is_empty(),
        }
    }
}

/// Evaluate each requested indicator once against the same history.
pub fn compute_indicators(
    history: &[PriceRecord],
    types: &[IndicatorType],
) -> Result<HashMap<IndicatorType, IndicatorOutput>, IndicatorError> {
    let mut out = HashMap::with_capacity(types.len());
    for ty in types {
        if out.contains_key(ty) {
            continue;
        }
        let output = match *ty {
            IndicatorType::Sma(n) => IndicatorOutput::Simple(calculate_sma(history, n)?),
            IndicatorType::Ema(n) => IndicatorOutput::Simple(calculate_ema(&closes(history), n)?),
            IndicatorType::Rsi(n) => IndicatorOutput::Simple(calculate_rsi(history, n)?),
            IndicatorType::Macd { fast, slow, signal } => {
                IndicatorOutput::Macd(calculate_macd(history, fast, slow, signal)?)
            }
        };
        out.insert(*ty, output);
    }
    Ok(out)
}
