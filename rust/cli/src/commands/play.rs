//! # Play Command
//!
//! One interactive game: the user holds seat 0, an automated opponent built
//! from the chooser registry holds seat 1.
//!
//! Each prompt shows both boards and the user's hand. Input is a card and a
//! street (`Qc front`, `10h m`, `As back`); `q` quits and `?` prints help.
//! Rejected placements are reported and the prompt repeats with nothing
//! changed.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_move, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_placement};
use pineapple_ai::create_chooser;
use pineapple_engine::game::{Game, MoveRecord};
use pineapple_engine::player::Player;
use std::io::{BufRead, Write};

const HUMAN_SEAT: usize = 0;
const HELP: &str = "Enter a card from your hand and a street: front (3 cards), middle (5), back (5).\n\
Examples: 'Qc front', '10h m', 'As back'. Type q to quit.";

/// Handle the play command: one interactive game against an automated seat.
///
/// # Examples
///
/// ```ignore
/// use pineapple_cli::commands::handle_play_command;
/// use std::io::{stdin, stdout, stderr};
///
/// let config = Config::default();
/// handle_play_command(None, None, &config, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    chooser: Option<String>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let chooser_name = chooser.unwrap_or_else(|| config.chooser.clone());
    let chooser = create_chooser(&chooser_name, seed)?;

    let players = vec![Player::human("You"), Player::automated("Opponent")];
    let mut game = Game::new(players, chooser, config.game_config(Some(seed)))?;
    let names: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();

    writeln!(out, "play: seed={} chooser={}", seed, game.chooser_name())?;
    let opening = game.start()?;
    print_moves(out, &opening, &names)?;

    while !game.is_over() {
        show_table(&game, out)?;
        ui::prompt(out, "Your move: ")?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            writeln!(out, "Input closed, leaving the game.")?;
            return Ok(());
        };
        match parse_placement(&line) {
            ParseResult::Quit => {
                writeln!(out, "Quit.")?;
                return Ok(());
            }
            ParseResult::Help => writeln!(out, "{}", HELP)?,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Placement(card, street) => {
                match game.submit_move(HUMAN_SEAT, card, street) {
                    Ok(applied) => print_moves(out, applied.get(1..).unwrap_or(&[]), &names)?,
                    Err(e) if e.is_fatal() => {
                        ui::write_error(err, &e.to_string())?;
                        return Err(e.into());
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                }
            }
        }
    }

    writeln!(out, "Game over.")?;
    if let Some(result) = game.last_result() {
        for (name, board) in names.iter().zip(&result.boards) {
            writeln!(out, "{}:", name)?;
            writeln!(out, "{}", format_board(board))?;
        }
        for line in format_result(result, &names) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn show_table(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let players = game.players();
    writeln!(out)?;
    for (seat, p) in players.iter().enumerate() {
        if seat == HUMAN_SEAT {
            continue;
        }
        writeln!(out, "{} (score {}):", p.name(), p.score())?;
        writeln!(out, "{}", format_board(p.board()))?;
    }
    let me = &players[HUMAN_SEAT];
    writeln!(out, "Your board (score {}):", me.score())?;
    writeln!(out, "{}", format_board(me.board()))?;
    writeln!(out, "Your hand: {}", format_cards(me.hand()))?;
    Ok(())
}

fn print_moves(out: &mut dyn Write, moves: &[MoveRecord], names: &[String]) -> Result<(), CliError> {
    for m in moves {
        writeln!(out, "{}", format_move(m, names))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes());
        let result = handle_play_command(
            Some(42),
            Some("baseline".into()),
            &Config::default(),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_quit_leaves_cleanly() {
        let (result, out, err) = play("q\n");
        assert!(result.is_ok());
        assert!(out.contains("play: seed=42 chooser=BaselineChooser"));
        assert!(out.contains("Your hand: ["));
        assert!(out.contains("Quit."));
        assert!(err.is_empty());
    }

    #[test]
    fn test_bad_input_is_reported_and_prompt_repeats() {
        let (result, out, err) = play("hello\nZz front\nq\n");
        assert!(result.is_ok());
        assert_eq!(err.matches("Error:").count(), 2);
        assert_eq!(out.matches("Your move: ").count(), 3);
    }

    #[test]
    fn test_eof_ends_the_game() {
        let (result, out, _) = play("");
        assert!(result.is_ok());
        assert!(out.contains("Input closed"));
    }

    #[test]
    fn test_unknown_chooser_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(&b"q\n"[..]);
        let result = handle_play_command(
            Some(1),
            Some("oracle".into()),
            &Config::default(),
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(matches!(result, Err(CliError::Chooser(_))));
    }
}
