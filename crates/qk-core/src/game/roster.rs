use std::collections::{BTreeSet, HashMap};

use crate::game::Player;

/// Outcome of an identity announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// New identifier and new name: a player record was added
    Joined,
    /// Known identifier announced under a different name
    Renamed { previous: String },
    /// Unknown identifier announced under a known name
    Reconnected { previous_id: String },
    /// Known identifier re-announced with its current name
    Unchanged,
}

/// Players of one game in first-appearance order.
///
/// Lookups go through an identifier index and a name index. Identifiers are
/// unique among records; names normally are too, but a rename can collide
/// with another record's name, so the name index keeps every record for a
/// name and the earliest one wins.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, BTreeSet<usize>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `name`.
    ///
    /// A known identifier takes precedence over a known name, so a line that
    /// matches one record by identifier and another by name is a rename.
    pub fn announce(&mut self, id: &str, name: &str) -> Resolution {
        if let Some(&index) = self.by_id.get(id) {
            let Some(previous) = self.players[index].rename(name).map(str::to_string) else {
                return Resolution::Unchanged;
            };
            self.unindex_name(&previous, index);
            self.index_name(name, index);
            return Resolution::Renamed { previous };
        }

        if let Some(index) = self.first_named(name) {
            let previous_id = self.players[index].reconnect(id);
            self.by_id.remove(&previous_id);
            self.by_id.insert(id.to_string(), index);
            return Resolution::Reconnected { previous_id };
        }

        let index = self.players.len();
        self.players.push(Player::new(id, name));
        self.by_id.insert(id.to_string(), index);
        self.index_name(name, index);
        Resolution::Joined
    }

    /// Credit a kill to the player currently named `killer`.
    ///
    /// Unknown killers are ignored; returns whether a player was credited.
    pub fn credit(&mut self, killer: &str) -> bool {
        match self.first_named(killer) {
            Some(index) => {
                self.players[index].credit_kill();
                true
            }
            None => false,
        }
    }

    /// Take one kill back from the player currently named `victim`.
    ///
    /// Only a player with a positive count is debited; returns whether one was.
    pub fn debit(&mut self, victim: &str) -> bool {
        let Some(indices) = self.by_name.get(victim) else {
            return false;
        };
        let scored = indices.iter().copied().find(|&i| self.players[i].kills > 0);
        match scored {
            Some(index) => self.players[index].debit_kill(),
            None => false,
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Player> {
        self.by_id.get(id).map(|&i| &self.players[i])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Player> {
        self.first_named(name).map(|i| &self.players[i])
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    fn first_named(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).and_then(|set| set.first().copied())
    }

    fn index_name(&mut self, name: &str, index: usize) {
        self.by_name
            .entry(name.to_string())
            .or_default()
            .insert(index);
    }

    fn unindex_name(&mut self, name: &str, index: usize) {
        if let Some(set) = self.by_name.get_mut(name) {
            set.remove(&index);
            if set.is_empty() {
                self.by_name.remove(name);
            }
        }
    }
}
