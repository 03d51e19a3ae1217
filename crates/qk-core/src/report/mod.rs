//! Report rendering and output.
//!
//! - **JSON**: the `{ "games": { "game_1": {...} } }` document
//! - **TSV**: one row per player per game, for spreadsheets

mod format;
mod json;
mod tsv;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

pub use format::ReportFormat;
pub use json::JsonFormat;
pub use tsv::TsvFormat;

/// Write rendered report contents, creating missing parent directories
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
