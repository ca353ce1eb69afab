//! # Pineapple CLI Library
//!
//! Command-line front end for the Pineapple Open-Face Chinese Poker engine:
//! interactive play against an automated seat, batch simulation, chooser
//! evaluation and deal inspection.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pineapple", "sim", "--games", "10", "--players", "3"];
//! let code = pineapple_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against an automated opponent
//! - `sim`: Run automated games, optionally recording them as JSONL
//! - `eval`: Compare two chooser kinds heads-up
//! - `deal`: Show the opening hands of a deal
//! - `cfg`: Display the resolved configuration and where each value came from
//!
//! ## Configuration
//!
//! Defaults are overridden by a TOML file named in `PINEAPPLE_CONFIG`, which
//! is in turn overridden by `PINEAPPLE_SEED`, `PINEAPPLE_CHOOSER`,
//! `PINEAPPLE_THINK_MS` and `PINEAPPLE_FANTASYLAND`. Command-line flags win
//! over all of them.

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, PineappleCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pineapple", "deal", "--seed", "42"];
/// let code = pineapple_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PineappleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a clean exit
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Pineapple OFC CLI");
                    write_or_exit!(err, "Usage: pineapple <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: pineapple --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    let config = &resolved.config;

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Play { seed, chooser } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, chooser, config, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            players,
            seed,
            chooser,
            output,
        } => handle_sim_command(games, players, seed, chooser, output, config, out, err),
        Commands::Eval { a, b, games, seed } => {
            handle_eval_command(&a, &b, games, seed, config, out, err)
        }
        Commands::Deal { seed, players } => handle_deal_command(seed, players, config, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
