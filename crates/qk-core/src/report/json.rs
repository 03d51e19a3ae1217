//! JSON report format

use crate::error::Result;
use crate::parser::Report;

use super::format::ReportFormat;

/// JSON exporter for the full report
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    /// Indent with two spaces instead of emitting a single line
    pub pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ReportFormat for JsonFormat {
    fn render(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
