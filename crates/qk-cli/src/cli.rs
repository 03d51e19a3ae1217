//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qk_core::OutputFormat;

#[derive(Parser)]
#[command(name = "qk")]
#[command(about = "Quake 3 Arena game log reporter", version)]
pub struct Cli {
    /// Config file (missing file means defaults)
    #[arg(short, long, default_value = "qk.toml", global = true)]
    pub config: PathBuf,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a game log and write the kill report (default)
    Report {
        /// Game log to read [default: from config]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report destination, `-` for stdout [default: from config]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: json or tsv
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List each game's players with their rename history
    Players {
        /// Game log to read [default: from config]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only show this game number
        #[arg(short, long)]
        game: Option<usize>,
    },
}
