//! Players command: per-game roster with rename history.

use std::path::Path;

use anyhow::{Result, bail};
use qk_core::{Config, Game, GameId};

use super::load_report;

pub fn run(config: &Config, input: Option<&Path>, game: Option<usize>) -> Result<()> {
    let input = input.unwrap_or(&config.input);
    let report = load_report(input)?;

    match game {
        Some(number) => match report.game(number) {
            Some(g) => print_game(GameId(number), g),
            None => bail!("No game {} in log ({} games)", number, report.len()),
        },
        None => {
            for (id, g) in &report.games {
                print_game(*id, g);
            }
        }
    }

    Ok(())
}

fn print_game(id: GameId, game: &Game) {
    println!(
        "{}: {} kills, {} players",
        id,
        game.total_kills,
        game.players.len()
    );

    for player in game.player_records() {
        let history = if player.previous_names.is_empty() {
            String::new()
        } else {
            format!(" (was {})", player.previous_names.join(", "))
        };
        println!(
            "  [{:>2}] {:<24} {:>4}{}",
            player.id, player.name, player.kills, history
        );
    }
}
