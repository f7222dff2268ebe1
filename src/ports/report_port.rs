//! Report rendering port trait.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::PricetaError;
use std::io::Write;

/// Port for presenting a computed analysis.
pub trait ReportPort {
    fn write(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<(), PricetaError>;

    /// Default implementation: renders into an in-memory buffer.
    fn render(&self, report: &AnalysisReport) -> Result<String, PricetaError> {
        let mut buf = Vec::new();
        self.write(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| PricetaError::Data {
            reason: format!("report is not valid UTF-8: {}", e),
        })
    }
}
