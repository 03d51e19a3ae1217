//! ReportFormat trait definition

use crate::error::Result;
use crate::parser::Report;

/// Trait for report format implementations
pub trait ReportFormat {
    /// Render the whole report
    fn render(&self, report: &Report) -> Result<String>;

    /// Conventional file extension, without the dot
    fn extension(&self) -> &'static str;
}
