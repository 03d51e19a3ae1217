use serde::Serialize;

/// A player resolved within one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Client identifier as last announced by the server
    pub id: String,
    pub name: String,
    /// Earlier display names, oldest first
    pub previous_names: Vec<String>,
    pub kills: u32,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            previous_names: Vec::new(),
            kills: 0,
        }
    }

    /// Switch to a new display name, archiving the current one.
    ///
    /// Returns the archived name, or `None` if the name did not change.
    pub fn rename(&mut self, name: &str) -> Option<&str> {
        if self.name == name {
            return None;
        }
        let previous = std::mem::replace(&mut self.name, name.to_string());
        self.previous_names.push(previous);
        self.previous_names.last().map(String::as_str)
    }

    /// Rebind to a new client identifier, returning the old one
    pub fn reconnect(&mut self, id: &str) -> String {
        std::mem::replace(&mut self.id, id.to_string())
    }

    pub fn credit_kill(&mut self) {
        self.kills += 1;
    }

    /// Take back one kill. Never goes below zero; returns whether a kill was removed.
    pub fn debit_kill(&mut self) -> bool {
        if self.kills == 0 {
            return false;
        }
        self.kills -= 1;
        true
    }
}
