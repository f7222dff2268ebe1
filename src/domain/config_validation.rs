//! Configuration validation.
//!
//! Validates the indicator and chart settings before an analysis runs.
//! Missing keys are fine (defaults apply); present keys must be valid.

use crate::domain::error::PricetaError;
use crate::domain::indicator::macd::{DEFAULT_FAST, DEFAULT_SLOW};
use crate::ports::config_port::ConfigPort;

pub const MAX_CHART_WIDTH: i64 = 200;

const PERIOD_KEYS: [&str; 6] = [
    "sma_window",
    "ema_period",
    "rsi_period",
    "macd_fast",
    "macd_slow",
    "macd_signal",
];

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), PricetaError> {
    validate_periods(config)?;
    validate_macd_order(config)?;
    validate_chart_width(config)?;
    validate_summary_flag(config)?;
    Ok(())
}

fn validate_periods(config: &dyn ConfigPort) -> Result<(), PricetaError> {
    for key in PERIOD_KEYS {
        if let Some(value) = parse_int(config, "indicators", key)? {
            if value <= 0 {
                return Err(invalid("indicators", key, format!("{} must be positive", key)));
            }
        }
    }
    Ok(())
}

fn validate_macd_order(config: &dyn ConfigPort) -> Result<(), PricetaError> {
    let fast = parse_int(config, "indicators", "macd_fast")?.unwrap_or(DEFAULT_FAST as i64);
    let slow = parse_int(config, "indicators", "macd_slow")?.unwrap_or(DEFAULT_SLOW as i64);
    if fast >= slow {
        return Err(invalid(
            "indicators",
            "macd_fast",
            "macd_fast must be less than macd_slow".to_string(),
        ));
    }
    Ok(())
}

fn validate_chart_width(config: &dyn ConfigPort) -> Result<(), PricetaError> {
    if let Some(width) = parse_int(config, "chart", "width")? {
        if !(1..=MAX_CHART_WIDTH).contains(&width) {
            return Err(invalid(
                "chart",
                "width",
                format!("width must be between 1 and {}", MAX_CHART_WIDTH),
            ));
        }
    }
    Ok(())
}

fn validate_summary_flag(config: &dyn ConfigPort) -> Result<(), PricetaError> {
    let Some(value) = config.get_string("chart", "summary") else {
        return Ok(());
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "false" | "no" | "0" => Ok(()),
        _ => Err(invalid(
            "chart",
            "summary",
            "summary must be a boolean".to_string(),
        )),
    }
}

/// `Ok(None)` when the key is absent; an error when it is present but not
/// an integer.
pub fn parse_int(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<i64>, PricetaError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(section, key, format!("{} must be an integer", key))),
    }
}

fn invalid(section: &str, key: &str, reason: String) -> PricetaError {
    PricetaError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}
