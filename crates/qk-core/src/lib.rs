//! # qk-core
//!
//! Core library for the qk game log reporter.
//!
//! This crate provides:
//! - Line classification and field extraction for game server logs
//! - Per-game state folding with player identity resolution
//! - Splitting a log into games and building the `games` report
//! - Log reading and report rendering (JSON, TSV)

pub mod config;
pub mod error;
pub mod game;
pub mod log;
pub mod parser;
pub mod report;
pub mod source;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use game::{Game, GameBuilder, Player, Resolution, Roster};
pub use log::{
    Identity, KillEvent, LineKind, WORLD_ACTOR, classify, extract_identity, extract_kill,
};
pub use parser::{GameId, Report, parse_lines};
pub use report::{JsonFormat, ReportFormat, TsvFormat, write_report};
pub use source::{decode_log, read_log};
