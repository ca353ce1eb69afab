//! Command-line argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pineapple",
    version,
    about = "Pineapple Open-Face Chinese Poker engine"
)]
pub struct PineappleCli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game against an automated opponent
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Chooser driving the opponent (default from config)
        #[arg(long)]
        chooser: Option<String>,
    },
    /// Run automated games and report scores
    Sim {
        #[arg(long)]
        games: u32,
        /// Seats at the table, 2 to 4 (default from config)
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        chooser: Option<String>,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Pit two chooser kinds against each other heads-up
    Eval {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the opening hands of a deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Print the resolved configuration with value sources
    Cfg,
}
