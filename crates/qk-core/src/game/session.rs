use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::game::{Player, Resolution, Roster};
use crate::log::{LineKind, WORLD_ACTOR, classify, extract_identity, extract_kill};

/// Summary of one game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    /// Every kill line in the game, world and self kills included
    pub total_kills: u32,
    /// Current names of all players, in first-appearance order
    pub players: Vec<String>,
    /// Kills per player; players without kills are omitted
    pub kills: BTreeMap<String, u32>,
    pub kills_by_means: BTreeMap<String, u32>,
    #[serde(skip)]
    player_records: Vec<Player>,
}

impl Game {
    /// Resolved player records, including rename history
    pub fn player_records(&self) -> &[Player] {
        &self.player_records
    }

    /// Sum of per-player kills (never more than `total_kills`)
    pub fn credited_kills(&self) -> u32 {
        self.kills.values().sum()
    }
}

/// Folds the lines of one game into a [`Game`]
#[derive(Debug, Default)]
pub struct GameBuilder {
    roster: Roster,
    total_kills: u32,
    kills_by_means: BTreeMap<String, u32>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one line. `line_no` is the 1-based position in the whole log,
    /// used only for error reporting.
    pub fn apply(&mut self, line_no: usize, line: &str) -> Result<()> {
        match classify(line) {
            LineKind::Kill => self.apply_kill(line_no, line),
            LineKind::Identity => self.apply_identity(line_no, line),
            LineKind::SessionStart | LineKind::Unrecognized => Ok(()),
        }
    }

    fn apply_identity(&mut self, line_no: usize, line: &str) -> Result<()> {
        let identity = extract_identity(line).map_err(|reason| Error::MalformedIdentity {
            line: line_no,
            content: line.to_string(),
            reason,
        })?;

        let resolution = self.roster.announce(identity.id, identity.name);
        if resolution != Resolution::Unchanged {
            trace!(
                "Line {}: client {} as {:?}: {:?}",
                line_no, identity.id, identity.name, resolution
            );
        }
        Ok(())
    }

    fn apply_kill(&mut self, line_no: usize, line: &str) -> Result<()> {
        let kill = extract_kill(line).map_err(|reason| Error::MalformedKill {
            line: line_no,
            content: line.to_string(),
            reason,
        })?;

        if kill.killer == WORLD_ACTOR || kill.killer == kill.victim {
            if !self.roster.debit(kill.victim) {
                trace!("Line {}: nothing to debit from {:?}", line_no, kill.victim);
            }
        } else if !self.roster.credit(kill.killer) {
            trace!("Line {}: unknown killer {:?}", line_no, kill.killer);
        }

        self.total_kills += 1;
        *self
            .kills_by_means
            .entry(kill.means.to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    /// Finish the game and build its summary
    pub fn finish(self) -> Game {
        let player_records = self.roster.into_players();

        let kills = player_records
            .iter()
            .filter(|p| p.kills > 0)
            .map(|p| (p.name.clone(), p.kills))
            .collect();
        let players = player_records.iter().map(|p| p.name.clone()).collect();

        Game {
            total_kills: self.total_kills,
            players,
            kills,
            kills_by_means: self.kills_by_means,
            player_records,
        }
    }
}
