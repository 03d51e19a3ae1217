//! CLI command implementations.

pub mod players;
pub mod report;

use std::path::Path;

use anyhow::{Context, Result};
use qk_core::{Report, parse_lines, read_log};
use tracing::info;

/// Read and parse a game log
fn load_report(input: &Path) -> Result<Report> {
    let shown = input.display();
    let lines = read_log(input).with_context(|| format!("Failed to read log {}", shown))?;
    let report = parse_lines(&lines).with_context(|| format!("Failed to parse log {}", shown))?;
    info!(
        "Parsed {} games ({} kills) from {}",
        report.len(),
        report.total_kills(),
        input.display()
    );
    Ok(report)
}
