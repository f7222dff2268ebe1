//! Domain error types.

/// Rejected indicator input. Insufficient history is not an error; the
/// indicator functions return an empty series for that.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndicatorError {
    #[error("{indicator} period must be positive")]
    InvalidPeriod { indicator: &'static str },
}

/// Top-level error type for priceta.
#[derive(Debug, thiserror::Error)]
pub enum PricetaError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no price history for {code}")]
    NoData { code: String },

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PricetaError> for std::process::ExitCode {
    fn from(err: &PricetaError) -> Self {
        let code: u8 = match err {
            PricetaError::Io(_) => 1,
            PricetaError::ConfigParse { .. }
            | PricetaError::ConfigMissing { .. }
            | PricetaError::ConfigInvalid { .. } => 2,
            PricetaError::Data { .. } => 3,
            PricetaError::Indicator(_) => 4,
            PricetaError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
