//! Plain-text chart rendering of an analysis report.
//!
//! Each series value becomes one fixed-width row: date, value, and a bar of
//! `#` whose length is proportional to the value's position in a
//! `(min, max)` range.

use std::io::Write;

use chrono::NaiveDate;

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::PricetaError;
use crate::ports::report_port::ReportPort;

pub const BAR_CHAR: char = '#';
pub const RSI_RANGE: (f64, f64) = (0.0, 100.0);

/// Smallest and largest value, or `None` for an empty series.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// Bar length for `value` scaled into `0..=width`. A degenerate range
/// (`max <= min`) puts every bar at position 0.
pub fn bar_width(value: f64, min: f64, max: f64, width: usize) -> usize {
    let span = max - min;
    if span <= 0.0 {
        return 0;
    }
    let ratio = ((value - min) / span).clamp(0.0, 1.0);
    (ratio * width as f64).round() as usize
}

/// Render `values` as rows labelled with the trailing dates of `dates`.
pub fn render_series(
    title: &str,
    dates: &[NaiveDate],
    values: &[f64],
    range: (f64, f64),
    width: usize,
) -> String {
    if values.is_empty() {
        return format!("{}: insufficient data\n", title);
    }

    let (min, max) = range;
    let mut out = format!("{} [{:.2}, {:.2}]\n", title, min, max);

    let labels = &dates[dates.len().saturating_sub(values.len())..];
    for (date, &value) in labels.iter().zip(values) {
        let bar: String = std::iter::repeat_n(BAR_CHAR, bar_width(value, min, max, width)).collect();
        out.push_str(&format!("{} | {:>10.2} | {}\n", date.format("%Y-%m-%d"), value, bar));
    }
    out
}

fn render_auto(title: &str, dates: &[NaiveDate], values: &[f64], width: usize) -> String {
    let range = value_range(values).unwrap_or((0.0, 0.0));
    render_series(title, dates, values, range, width)
}

fn latest(values: &[f64]) -> String {
    values
        .last()
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}

pub struct AsciiChartAdapter;

impl ReportPort for AsciiChartAdapter {
    fn write(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<(), PricetaError> {
        let cfg = &report.config;
        let width = cfg.chart_width;

        match (report.dates.first(), report.dates.last()) {
            (Some(first), Some(last)) => writeln!(
                out,
                "== {}: {} records, {} to {} ==",
                report.code,
                report.dates.len(),
                first,
                last
            )?,
            _ => writeln!(out, "== {}: no records ==", report.code)?,
        }
        writeln!(out)?;

        let sma = cfg.sma().to_string();
        let sma_dates = report.aligned_dates(cfg.sma());
        write!(out, "{}", render_auto(&sma, sma_dates, &report.sma, width))?;
        writeln!(out)?;

        let ema = cfg.ema().to_string();
        let ema_dates = report.aligned_dates(cfg.ema());
        write!(out, "{}", render_auto(&ema, ema_dates, &report.ema, width))?;
        writeln!(out)?;

        let rsi = cfg.rsi().to_string();
        write!(
            out,
            "{}",
            render_series(&rsi, report.aligned_dates(cfg.rsi()), &report.rsi, RSI_RANGE, width)
        )?;
        writeln!(out)?;

        let macd = cfg.macd().to_string();
        let m = &report.macd;
        // the signal and histogram are start-paired with the line, so they
        // take the line's trailing dates
        let macd_dates = report.aligned_dates(cfg.macd());
        for (label, values) in [
            ("line", &m.line),
            ("signal", &m.signal),
            ("histogram", &m.histogram),
        ] {
            let title = format!("{} {}", macd, label);
            write!(out, "{}", render_auto(&title, macd_dates, values, width))?;
            writeln!(out)?;
        }

        if cfg.show_summary {
            let close = report
                .last_close
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "n/a".to_string());
            writeln!(out, "Latest:")?;
            writeln!(out, "  close           {}", close)?;
            writeln!(out, "  {:<15} {}", sma, latest(&report.sma))?;
            writeln!(out, "  {:<15} {}", ema, latest(&report.ema))?;
            writeln!(out, "  {:<15} {}", rsi, latest(&report.rsi))?;
            writeln!(out, "  {:<15} {}", "MACD line", latest(&m.line))?;
            writeln!(out, "  {:<15} {}", "MACD signal", latest(&m.signal))?;
            writeln!(out, "  {:<15} {}", "MACD histogram", latest(&m.histogram))?;
        }

        Ok(())
    }
}
