//! Splits a log into games and folds each one.
//!
//! A game starts at an `InitGame` line and runs up to the next one, or to the
//! end of the log. Lines before the first `InitGame` belong to no game.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::game::{Game, GameBuilder};
use crate::log::is_session_start;

/// 1-based game number, shown as `game_<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(pub usize);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game_{}", self.0)
    }
}

impl Serialize for GameId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All games found in a log, keyed by game number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub games: BTreeMap<GameId, Game>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look up a game by its 1-based number
    pub fn game(&self, number: usize) -> Option<&Game> {
        self.games.get(&GameId(number))
    }

    pub fn total_kills(&self) -> u32 {
        self.games.values().map(|g| g.total_kills).sum()
    }
}

/// Parse a whole log into a [`Report`].
///
/// Lines must be in file order with line endings stripped. The first
/// malformed kill or identity line aborts the parse.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Report> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_session_start(line.as_ref()))
        .map(|(i, _)| i)
        .collect();

    if let Some(&first) = starts.first().filter(|&&first| first > 0) {
        debug!("Skipping {} lines before the first game", first);
    }

    let mut report = Report::default();
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(lines.len());
        let id = GameId(n + 1);
        let game = fold_game(start, &lines[start..end])?;
        debug!(
            "Folded {} (lines {}-{}): {} kills, {} players",
            id,
            start + 1,
            end,
            game.total_kills,
            game.players.len()
        );
        report.games.insert(id, game);
    }

    Ok(report)
}

fn fold_game<S: AsRef<str>>(offset: usize, lines: &[S]) -> Result<Game> {
    let mut builder = GameBuilder::new();
    for (i, line) in lines.iter().enumerate() {
        builder.apply(offset + i + 1, line.as_ref())?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const INIT: &str = "20:00 InitGame: \\sv_floodProtect\\1\\sv_maxPing\\0";
    const DONO: &str = "20:37 ClientUserinfoChanged: 3 n\\Dono da Bola\\t\\0";
    const ISGALAMIDO: &str = "20:40 ClientUserinfoChanged: 2 n\\Isgalamido\\t\\0";
    const KILL: &str = "20:34 Kill: 1022 2 22: Isgalamido killed Dono da Bola by MOD_TRIGGER_HURT";

    #[test]
    fn test_game_id_display_and_order() {
        assert_eq!(GameId(1).to_string(), "game_1");
        assert!(GameId(2) < GameId(10));
    }

    #[test]
    fn test_parse_one_game() {
        let report = parse_lines(&[INIT, DONO, ISGALAMIDO, KILL]).unwrap();
        assert_eq!(report.len(), 1);

        let game = report.game(1).unwrap();
        assert_eq!(game.total_kills, 1);
        assert_eq!(game.players, vec!["Dono da Bola", "Isgalamido"]);
        assert_eq!(game.kills.get("Isgalamido"), Some(&1));
        assert_eq!(game.kills_by_means.get("MOD_TRIGGER_HURT"), Some(&1));
    }

    #[test]
    fn test_parse_two_games_are_independent() {
        let lines = [INIT, DONO, ISGALAMIDO, KILL, INIT, DONO, ISGALAMIDO, KILL];
        let report = parse_lines(&lines).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.game(1), report.game(2));
        assert_eq!(report.game(2).unwrap().kills.get("Isgalamido"), Some(&1));
        assert_eq!(report.total_kills(), 2);
    }

    #[test]
    fn test_player_state_does_not_leak_between_games() {
        let report = parse_lines(&[
            INIT,
            DONO,
            ISGALAMIDO,
            KILL,
            INIT,
            "20:50 Kill: 1022 2 22: Isgalamido killed Dono da Bola by MOD_RAILGUN",
        ])
        .unwrap();

        let second = report.game(2).unwrap();
        assert_eq!(second.total_kills, 1);
        assert!(second.players.is_empty());
        assert!(second.kills.is_empty());
        assert_eq!(second.kills_by_means.get("MOD_RAILGUN"), Some(&1));
    }

    #[test]
    fn test_no_session_start_gives_empty_report() {
        let report = parse_lines(&[DONO, ISGALAMIDO, KILL]).unwrap();
        assert!(report.is_empty());

        let empty: [&str; 0] = [];
        assert!(parse_lines(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_lines_before_first_game_are_discarded() {
        let report = parse_lines(&[DONO, KILL, INIT, ISGALAMIDO]).unwrap();
        assert_eq!(report.len(), 1);

        let game = report.game(1).unwrap();
        assert_eq!(game.total_kills, 0);
        assert_eq!(game.players, vec!["Isgalamido"]);
    }

    #[test]
    fn test_game_count_matches_session_starts() {
        let lines = vec![INIT; 12];
        let report = parse_lines(&lines).unwrap();
        assert_eq!(report.len(), 12);
        assert!(report.game(12).is_some());
        assert!(report.game(13).is_none());
        assert!(report.game(0).is_none());
    }

    #[test]
    fn test_total_kills_counts_every_kill_line() {
        let report = parse_lines(&[
            INIT,
            DONO,
            ISGALAMIDO,
            KILL,
            "20:35 Kill: 1022 2 22: <world> killed Isgalamido by MOD_FALLING",
            "20:36 Kill: 2 2 7: Isgalamido killed Isgalamido by MOD_ROCKET_SPLASH",
            "20:37 Kill: 3 2 7: Dono da Bola killed Isgalamido by MOD_ROCKET",
        ])
        .unwrap();

        let game = report.game(1).unwrap();
        assert_eq!(game.total_kills, 4);
        assert_eq!(game.kills.get("Dono da Bola"), Some(&1));
        assert_eq!(game.kills.get("Isgalamido"), None);
        assert!(game.credited_kills() < game.total_kills);
    }

    #[test]
    fn test_error_aborts_whole_parse() {
        let err = parse_lines(&[
            INIT,
            DONO,
            KILL,
            INIT,
            "20:40 Kill: 1022 2 22: Isgalamido killed Dono da Bola",
        ])
        .unwrap_err();
        assert!(matches!(err, Error::MalformedKill { line: 5, .. }));
    }

    #[test]
    fn test_parse_accepts_owned_lines() {
        let lines: Vec<String> = [INIT, DONO].iter().map(|s| s.to_string()).collect();
        let report = parse_lines(&lines).unwrap();
        assert_eq!(report.game(1).unwrap().players, vec!["Dono da Bola"]);
    }

    #[test]
    fn test_parse_server_log_excerpt() {
        let lines = crate::source::decode_log(include_bytes!("../testdata/games_excerpt.log"));
        let report = parse_lines(&lines).unwrap();
        assert_eq!(report.len(), 2);

        let first = report.game(1).unwrap();
        assert_eq!(first.total_kills, 0);
        assert_eq!(first.players, vec!["Isgalamido"]);

        let second = report.game(2).unwrap();
        assert_eq!(second.total_kills, 8);
        assert_eq!(second.players, vec!["Isgalamido", "Mocinha"]);
        assert_eq!(second.kills.get("Isgalamido"), Some(&1));
        assert_eq!(second.kills.len(), 1);
        assert_eq!(second.kills_by_means.get("MOD_TRIGGER_HURT"), Some(&4));
        assert_eq!(second.kills_by_means.get("MOD_ROCKET_SPLASH"), Some(&3));
        assert_eq!(second.kills_by_means.get("MOD_ROCKET"), Some(&1));
        assert_eq!(
            second.player_records()[1].previous_names,
            vec!["Dono da Bola"]
        );
    }

    #[test]
    fn test_report_serializes_games_by_key() {
        let report = parse_lines(&[INIT, DONO, ISGALAMIDO, KILL]).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["games"]["game_1"]["total_kills"], 1);
        assert_eq!(value["games"]["game_1"]["kills"]["Isgalamido"], 1);
    }
}
