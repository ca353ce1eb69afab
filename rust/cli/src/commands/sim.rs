//! Simulation command handler.
//!
//! Plays a number of fully automated games at one table. Scores accumulate
//! across games; the table's leader is reported at the end. With `--output`
//! every game is appended to a JSONL file as a [`GameRecord`].
//!
//! # Examples
//!
//! ```no_run
//! use pineapple_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let config = Default::default();
//! handle_sim_command(10, None, Some(42), None, None, &config, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use crate::validation::{validate_games, validate_players};
use pineapple_ai::create_chooser;
use pineapple_engine::game::Game;
use pineapple_engine::logger::{GameLogger, GameRecord};
use pineapple_engine::player::Player;
use std::io::Write;
use std::path::PathBuf;

/// Handle the sim command.
///
/// `players`, `seed` and `chooser` fall back to the configuration.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    games: u32,
    players: Option<usize>,
    seed: Option<u64>,
    chooser: Option<String>,
    output: Option<PathBuf>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_games(games) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let players = players.unwrap_or(config.players);
    if let Err(msg) = validate_players(players) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let chooser_name = chooser.unwrap_or_else(|| config.chooser.clone());
    let chooser = create_chooser(&chooser_name, seed)?;
    let seats = (1..=players)
        .map(|i| Player::automated(format!("Bot{}", i)))
        .collect();
    let mut game = Game::new(seats, chooser, config.game_config(Some(seed)))?;
    let names: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();

    let mut logger = match output.as_ref() {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: games={} players={} chooser={} seed={}",
        games,
        players,
        game.chooser_name(),
        seed
    )?;

    for i in 1..=games {
        game.start()?;
        let Some(result) = game.last_result().cloned() else {
            // every seat is automated, so start always plays to the end
            ui::display_warning(err, &format!("game {} did not finish", i))?;
            continue;
        };

        let points: Vec<String> = result.points.iter().map(|p| format!("{:+}", p)).collect();
        writeln!(
            out,
            "Game {}: points [{}] leader {}",
            i,
            points.join(", "),
            result.winner_name.as_deref().unwrap_or("-")
        )?;

        if let Some(logger) = logger.as_mut() {
            let record = GameRecord {
                game_id: logger.next_id(),
                seed: Some(game.seed()),
                players: names.clone(),
                moves: game.moves().to_vec(),
                result: Some(result),
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    let totals: Vec<String> = game
        .players()
        .iter()
        .map(|p| format!("{} {}", p.name(), p.score()))
        .collect();
    writeln!(out, "Final scores: {}", totals.join(", "))?;
    let leader = game
        .last_result()
        .and_then(|r| r.winner_name.clone())
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "Leader: {}", leader)?;
    if let (Some(logger), Some(path)) = (logger.as_ref(), output.as_ref()) {
        writeln!(out, "Recorded {} games to {}", logger.written(), path.display())?;
    }
    Ok(())
}
