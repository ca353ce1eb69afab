//! Deal command handler.
//!
//! Shuffles a deck, deals the opening five cards to every seat and prints
//! them. Nothing is placed.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_cards;
use crate::ui;
use crate::validation::validate_players;
use pineapple_ai::create_chooser;
use pineapple_engine::game::Game;
use pineapple_engine::player::Player;
use std::io::Write;

/// Handle the deal command.
///
/// `seed` and `players` fall back to the configuration when absent.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<usize>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let players = players.unwrap_or(config.players);
    if let Err(msg) = validate_players(players) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let seats = (1..=players)
        .map(|i| Player::human(format!("P{}", i)))
        .collect();
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let chooser = create_chooser(&config.chooser, seed)?;
    let mut game = Game::new(seats, chooser, config.game_config(Some(seed)))?;
    game.start()?;

    writeln!(out, "Seed: {}", game.seed())?;
    for p in game.players() {
        writeln!(out, "{}: {}", p.name(), format_cards(p.hand()))?;
    }
    writeln!(out, "Deck remaining: {}", game.deck_remaining())?;
    Ok(())
}
