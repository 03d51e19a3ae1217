//! Game server log line handling.
//!
//! Lines are tagged by a timestamped marker (`12:34 InitGame`, `12:34 Kill`,
//! `12:34 ClientUserinfoChanged`) and, for kill and identity lines, split
//! into their fields on fixed separators.

mod classify;
mod extract;

pub use classify::*;
pub use extract::*;

/// Killer name used by the server for environmental deaths
pub const WORLD_ACTOR: &str = "<world>";
