//! TSV report format

use crate::error::Result;
use crate::parser::Report;

use super::format::ReportFormat;

/// One row per player per game: `game`, `player`, `kills`.
///
/// Players without kills are listed with 0 so the roster stays complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvFormat;

impl TsvFormat {
    pub fn header() -> String {
        ["game", "player", "kills"].join("\t")
    }
}

impl ReportFormat for TsvFormat {
    fn render(&self, report: &Report) -> Result<String> {
        let mut output = Self::header();
        output.push('\n');

        for (id, game) in &report.games {
            for player in &game.players {
                let kills = game.kills.get(player).copied().unwrap_or(0);
                output.push_str(&format!("{}\t{}\t{}\n", id, player, kills));
            }
        }

        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "tsv"
    }
}
