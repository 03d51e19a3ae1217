//! Report command: parse a log and write the kill report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qk_core::{Config, OutputFormat, write_report};
use tracing::info;

use super::load_report;

/// Where the rendered report goes
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// An explicit path is used as is (`-` means stdout); the configured path
/// takes the extension of the chosen format.
fn destination(config: &Config, output: Option<&Path>, extension: &str) -> Destination {
    match output {
        Some(path) if path == Path::new("-") => Destination::Stdout,
        Some(path) => Destination::File(path.to_path_buf()),
        None => Destination::File(config.output.with_extension(extension)),
    }
}

pub fn run(
    config: &Config,
    input: Option<&Path>,
    output: Option<&Path>,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<()> {
    let input = input.unwrap_or(&config.input);
    let format = format.unwrap_or(config.format);
    let formatter = format.formatter(config.pretty && !compact);

    let report = load_report(input)?;
    let content = formatter
        .render(&report)
        .context("Failed to render report")?;

    match destination(config, output, formatter.extension()) {
        Destination::Stdout => println!("{}", content),
        Destination::File(path) => {
            write_report(&path, &content)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            info!("Wrote {} report to {}", format, path.display());
        }
    }

    Ok(())
}
