use anyhow::Result;
use clap::Parser;
use qk_core::Config;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = match Config::load(&cli.config) {
        Ok(c) => {
            debug!("Loaded config from {:?}", cli.config);
            c
        }
        Err(e) if e.is_not_found() => {
            debug!("No config at {:?}, using defaults", cli.config);
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let result = match cli.command {
        None => commands::report::run(&config, None, None, None, false),
        Some(Command::Report {
            input,
            output,
            format,
            compact,
        }) => commands::report::run(
            &config,
            input.as_deref(),
            output.as_deref(),
            format,
            compact,
        ),
        Some(Command::Players { input, game }) => {
            commands::players::run(&config, input.as_deref(), game)
        }
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// A valid RUST_LOG replaces the default `qk` filter; `--verbose` only
/// changes the default.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        _ if verbose => EnvFilter::new("qk=debug"),
        _ => EnvFilter::new("qk=info"),
    }
}
