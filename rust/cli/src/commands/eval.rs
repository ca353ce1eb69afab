//! Head-to-head evaluation of two chooser kinds.
//!
//! Each game is a fresh heads-up table. Seats swap every game so neither
//! side always acts first.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use crate::validation::validate_games;
use pineapple_ai::{SeatChooser, create_chooser};
use pineapple_engine::game::Game;
use pineapple_engine::player::Player;
use std::cmp::Ordering;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    a_wins: u32,
    b_wins: u32,
    ties: u32,
    a_points: i64,
    b_points: i64,
}

/// Handle the eval command: `games` heads-up games between choosers `a` and `b`.
///
/// # Example
///
/// ```rust,ignore
/// use pineapple_cli::commands::handle_eval_command;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_eval_command("baseline", "random", 10, Some(42), &Default::default(), &mut out, &mut err)?;
/// ```
pub fn handle_eval_command(
    a: &str,
    b: &str,
    games: u32,
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_games(games) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let base_seed = seed.or(config.seed).unwrap_or_else(rand::random);
    writeln!(out, "eval: A={} B={} games={} seed={}", a, b, games, base_seed)?;

    let mut tally = Tally::default();
    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let a_first = i % 2 == 0;
        let chooser_a = create_chooser(a, game_seed)?;
        let chooser_b = create_chooser(b, game_seed.wrapping_add(1))?;
        let (seats, names) = if a_first {
            (vec![chooser_a, chooser_b], ["A", "B"])
        } else {
            (vec![chooser_b, chooser_a], ["B", "A"])
        };
        let chooser = SeatChooser::new(seats)
            .ok_or_else(|| CliError::InvalidInput("no choosers to seat".to_string()))?;

        let players = names.iter().map(|n| Player::automated(*n)).collect();
        let mut game = Game::new(players, Box::new(chooser), config.game_config(Some(game_seed)))?;
        game.start()?;
        let Some(result) = game.last_result() else {
            ui::display_warning(err, &format!("game {} did not finish", i + 1))?;
            continue;
        };

        let (a_pts, b_pts) = if a_first {
            (result.points[0], result.points[1])
        } else {
            (result.points[1], result.points[0])
        };
        tally.a_points += i64::from(a_pts);
        tally.b_points += i64::from(b_pts);
        match a_pts.cmp(&b_pts) {
            Ordering::Greater => tally.a_wins += 1,
            Ordering::Less => tally.b_wins += 1,
            Ordering::Equal => tally.ties += 1,
        }
    }

    writeln!(
        out,
        "Wins: A {}, B {}, ties {}",
        tally.a_wins, tally.b_wins, tally.ties
    )?;
    writeln!(out, "Points: A {:+}, B {:+}", tally.a_points, tally.b_points)?;
    Ok(())
}
