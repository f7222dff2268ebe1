//! Indicator analysis of one code's price history.
//!
//! Runs every configured indicator against the same history and keeps the
//! date list so the presentation layer can align each series to its
//! trailing dates.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::error::IndicatorError;
use crate::domain::indicator::macd::{DEFAULT_FAST, DEFAULT_SIGNAL, DEFAULT_SLOW};
use crate::domain::indicator::{compute_indicators, IndicatorOutput, IndicatorType, MacdSeries};
use crate::domain::ohlcv::PriceRecord;

pub const DEFAULT_SMA_WINDOW: usize = 3;
pub const DEFAULT_EMA_PERIOD: usize = 12;
pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub sma_window: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub chart_width: usize,
    pub show_summary: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sma_window: DEFAULT_SMA_WINDOW,
            ema_period: DEFAULT_EMA_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_fast: DEFAULT_FAST,
            macd_slow: DEFAULT_SLOW,
            macd_signal: DEFAULT_SIGNAL,
            chart_width: DEFAULT_CHART_WIDTH,
            show_summary: true,
        }
    }
}

impl AnalysisConfig {
    pub fn sma(&self) -> IndicatorType {
        IndicatorType::Sma(self.sma_window)
    }

    pub fn ema(&self) -> IndicatorType {
        IndicatorType::Ema(self.ema_period)
    }

    pub fn rsi(&self) -> IndicatorType {
        IndicatorType::Rsi(self.rsi_period)
    }

    pub fn macd(&self) -> IndicatorType {
        IndicatorType::Macd {
            fast: self.macd_fast,
            slow: self.macd_slow,
            signal: self.macd_signal,
        }
    }

    pub fn indicator_types(&self) -> Vec<IndicatorType> {
        vec![self.sma(), self.ema(), self.rsi(), self.macd()]
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub code: String,
    pub config: AnalysisConfig,
    pub dates: Vec<NaiveDate>,
    pub last_close: Option<f64>,
    pub sma: Vec<f64>,
    pub ema: Vec<f64>,
    pub rsi: Vec<f64>,
    pub macd: MacdSeries,
}

impl AnalysisReport {
    /// Dates the values of `ty` line up with: the history minus its
    /// warm-up records.
    pub fn aligned_dates(&self, ty: IndicatorType) -> &[NaiveDate] {
        &self.dates[ty.warmup().min(self.dates.len())..]
    }
}

pub fn run_analysis(
    code: &str,
    history: &[PriceRecord],
    config: &AnalysisConfig,
) -> Result<AnalysisReport, IndicatorError> {
    let types = config.indicator_types();
    for ty in &types {
        if history.len() < ty.min_history() {
            warn!(
                "{}: {} needs {} records, have {}",
                code,
                ty,
                ty.min_history(),
                history.len()
            );
        }
    }

    let mut outputs = compute_indicators(history, &types)?;
    debug!("{}: computed {} indicators", code, outputs.len());

    let macd = match outputs.remove(&config.macd()) {
        Some(IndicatorOutput::Macd(m)) => m,
        _ => MacdSeries::default(),
    };

    Ok(AnalysisReport {
        code: code.to_string(),
        config: config.clone(),
        dates: history.iter().map(|r| r.date).collect(),
        last_close: history.last().map(|r| r.close),
        sma: take_simple(&mut outputs, config.sma()),
        ema: take_simple(&mut outputs, config.ema()),
        rsi: take_simple(&mut outputs, config.rsi()),
        macd,
    })
}

fn take_simple(outputs: &mut HashMap<IndicatorType, IndicatorOutput>, ty: IndicatorType) -> Vec<f64> {
    match outputs.remove(&ty) {
        Some(IndicatorOutput::Simple(values)) => values,
        _ => Vec::new(),
    }
}
