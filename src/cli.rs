//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use crate::adapters::ascii_chart::AsciiChartAdapter;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::{run_analysis, AnalysisConfig};
use crate::domain::config_validation::{validate_analysis_config, MAX_CHART_WIDTH};
use crate::domain::error::PricetaError;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "priceta", about = "Technical indicators over daily price history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute SMA, EMA, RSI and MACD for a code and print a text chart
    Analyze {
        #[arg(long)]
        code: String,
        /// Directory holding <CODE>.csv files (overrides [data] path)
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Bar width in characters (overrides [chart] width)
        #[arg(long)]
        width: Option<usize>,
    },
    /// List codes available in the data directory
    List {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            code,
            data,
            config,
            start,
            end,
            width,
        } => run_analyze(&code, data.as_ref(), config.as_ref(), start, end, width),
        Command::List { data, config } => run_list(data.as_ref(), config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, PricetaError> {
    info!("loading config from {}", path.display());
    FileConfigAdapter::from_file(path).map_err(|e| PricetaError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn load_optional_config(path: Option<&PathBuf>) -> Result<Option<FileConfigAdapter>, PricetaError> {
    path.map(load_config).transpose()
}

pub fn build_analysis_config(config: &dyn ConfigPort) -> Result<AnalysisConfig, PricetaError> {
    validate_analysis_config(config)?;

    let defaults = AnalysisConfig::default();
    // validated above: every present value is a positive integer
    let period = |key: &str, default: usize| {
        config.get_int("indicators", key, default as i64) as usize
    };

    Ok(AnalysisConfig {
        sma_window: period("sma_window", defaults.sma_window),
        ema_period: period("ema_period", defaults.ema_period),
        rsi_period: period("rsi_period", defaults.rsi_period),
        macd_fast: period("macd_fast", defaults.macd_fast),
        macd_slow: period("macd_slow", defaults.macd_slow),
        macd_signal: period("macd_signal", defaults.macd_signal),
        chart_width: config.get_int("chart", "width", defaults.chart_width as i64) as usize,
        show_summary: config.get_bool("chart", "summary", defaults.show_summary),
    })
}

/// `--data` wins over `[data] path`.
pub fn resolve_data_dir(
    data_override: Option<&PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> Result<PathBuf, PricetaError> {
    if let Some(dir) = data_override {
        return Ok(dir.clone());
    }
    config
        .and_then(|c| c.get_string("data", "path"))
        .filter(|p| !p.trim().is_empty())
        .map(|p| PathBuf::from(p.trim()))
        .ok_or_else(|| PricetaError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        })
}

/// `--width` wins over `[chart] width`.
pub fn apply_width_override(
    config: &mut AnalysisConfig,
    width: Option<usize>,
) -> Result<(), PricetaError> {
    if let Some(width) = width {
        if width == 0 || width > MAX_CHART_WIDTH as usize {
            return Err(PricetaError::ConfigInvalid {
                section: "chart".into(),
                key: "width".into(),
                reason: format!("width must be between 1 and {}", MAX_CHART_WIDTH),
            });
        }
        config.chart_width = width;
    }
    Ok(())
}

fn run_analyze(
    code: &str,
    data: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    width: Option<usize>,
) -> Result<(), PricetaError> {
    let file_config = load_optional_config(config_path)?;
    let config_port = file_config.as_ref().map(|c| c as &dyn ConfigPort);

    let mut analysis_config = match config_port {
        Some(c) => build_analysis_config(c)?,
        None => AnalysisConfig::default(),
    };
    apply_width_override(&mut analysis_config, width)?;

    let data_dir = resolve_data_dir(data, config_port)?;
    info!("reading price data from {}", data_dir.display());
    let data_port = CsvAdapter::new(data_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_analyze_pipeline(
        &data_port,
        &AsciiChartAdapter,
        code.trim(),
        start,
        end,
        &analysis_config,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}

/// Fetch, analyse and render one code.
pub fn run_analyze_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    code: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: &AnalysisConfig,
    out: &mut dyn Write,
) -> Result<(), PricetaError> {
    let history = data_port.fetch_history(code, start, end)?;
    if history.is_empty() {
        return Err(PricetaError::NoData {
            code: code.to_string(),
        });
    }
    info!("analysing {} records for {}", history.len(), code);

    let report = run_analysis(code, &history, config)?;
    debug!(
        "{}: sma={} ema={} rsi={} macd={}",
        code,
        report.sma.len(),
        report.ema.len(),
        report.rsi.len(),
        report.macd.line.len()
    );

    report_port.write(&report, out)
}

fn run_list(data: Option<&PathBuf>, config_path: Option<&PathBuf>) -> Result<(), PricetaError> {
    let file_config = load_optional_config(config_path)?;
    let data_dir = resolve_data_dir(data, file_config.as_ref().map(|c| c as &dyn ConfigPort))?;

    let codes = CsvAdapter::new(data_dir.clone()).list_codes()?;
    if codes.is_empty() {
        eprintln!("No price files found in {}", data_dir.display());
    } else {
        for code in &codes {
            println!("{}", code);
        }
        info!("{} codes found", codes.len());
    }
    Ok(())
}

fn run_validate(config_path: &PathBuf) -> Result<(), PricetaError> {
    let adapter = load_config(config_path)?;
    let config = build_analysis_config(&adapter)?;

    eprintln!("Indicators:");
    for ty in config.indicator_types() {
        eprintln!("  {:<15} needs {} records", ty.to_string(), ty.min_history());
    }
    eprintln!("Chart width: {}", config.chart_width);
    eprintln!("\nConfiguration is valid.");
    Ok(())
}
