//! Settings loaded from `qk.toml`.
//!
//! ```toml
//! input = "input/games.log"
//! output = "output/report.json"
//! format = "json"
//! pretty = true
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::Result;
use crate::report::{JsonFormat, ReportFormat, TsvFormat};

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
}

impl OutputFormat {
    pub fn formatter(self, pretty: bool) -> Box<dyn ReportFormat> {
        match self {
            OutputFormat::Json => Box::new(JsonFormat { pretty }),
            OutputFormat::Tsv => Box::new(TsvFormat),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Game log to read
    pub input: PathBuf,
    /// Report destination
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input/games.log"),
            output: PathBuf::from("output/report.json"),
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
