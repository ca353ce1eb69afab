//! Read-only, serializable views of a game for display and persistence.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Street};
use crate::cards::Card;
use crate::game::{Game, GameResult, Phase};
use crate::player::Controller;
use crate::scoring::leader;

/// One seat as seen from outside.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub controller: Controller,
    pub hand: Vec<Card>,
    pub board: Board,
    pub score: i32,
}

/// Point-in-time copy of the whole table.
///
/// Holding a snapshot never affects the game it was taken from.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
    pub current_player_index: usize,
    /// Street of the placement phase; `None` outside placement
    pub current_street: Option<Street>,
    pub phase: String,
    pub game_over: bool,
    /// Seat with the highest cumulative score right now
    pub leader: Option<usize>,
    /// Highest cumulative score once the game is finished, first seat on
    /// ties; `None` otherwise
    pub winner: Option<usize>,
    pub deck_remaining: usize,
    #[serde(default)]
    pub last_result: Option<GameResult>,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let players: Vec<PlayerView> = game
            .players()
            .iter()
            .map(|p| PlayerView {
                name: p.name().to_string(),
                controller: p.controller(),
                hand: p.hand().to_vec(),
                board: p.board().clone(),
                score: p.score(),
            })
            .collect();
        let scores: Vec<i32> = players.iter().map(|p| p.score).collect();
        let phase = game.phase();
        let game_over = phase == Phase::Finished;
        let leader = leader(&scores);
        Self {
            current_player_index: game.current_player(),
            current_street: phase.street(),
            phase: phase.name().to_string(),
            game_over,
            leader,
            winner: if game_over { leader } else { None },
            deck_remaining: game.deck_remaining(),
            last_result: game.last_result().cloned(),
            players,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
