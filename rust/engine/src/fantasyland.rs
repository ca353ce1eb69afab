//! Fantasyland: a front street holding a pair of Queens or better hands the
//! player a fresh 14-card deal that the chooser lays out in one go.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::board::{Board, Street, BOARD_SIZE};
use crate::cards::{Card, Rank};
use crate::chooser::{ChoiceRequest, MoveChooser};
use crate::errors::GameError;
use crate::hand::{evaluate_hand, Category};
use crate::player::Player;
use crate::rules::{legal_moves, Move};

/// Cards dealt to a qualifying player.
pub const FANTASYLAND_DEAL: usize = 14;
/// Upper bound on placements during resolution.
pub const FANTASYLAND_PLACEMENTS: usize = BOARD_SIZE;
/// Lowest paired rank that qualifies.
pub const QUALIFYING_RANK: Rank = Rank::Queen;

/// What happened during a resolution round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FantasylandSummary {
    pub player: usize,
    pub dealt: usize,
    pub placed: usize,
    /// Cards still in hand once the board was built
    pub leftover: Vec<Card>,
}

/// True when the front street is complete and pairs Queens or better.
///
/// ```
/// use pineapple_engine::board::{Board, Street};
/// use pineapple_engine::cards::{Card, Rank, Suit};
/// use pineapple_engine::fantasyland::check_fantasyland;
///
/// let mut board = Board::new();
/// board.place(Street::Front, Card::new(Rank::Queen, Suit::Clubs)).unwrap();
/// board.place(Street::Front, Card::new(Rank::Queen, Suit::Diamonds)).unwrap();
/// assert!(!check_fantasyland(&board));
/// board.place(Street::Front, Card::new(Rank::Two, Suit::Spades)).unwrap();
/// assert!(check_fantasyland(&board));
/// ```
pub fn check_fantasyland(board: &Board) -> bool {
    if !board.is_full(Street::Front) {
        return false;
    }
    let value = evaluate_hand(board.street(Street::Front));
    value.category >= Category::OnePair
        && value
            .paired_rank()
            .is_some_and(|rank| rank >= QUALIFYING_RANK)
}

/// Lays out `player`'s hand onto their (empty) board through the chooser,
/// one card at a time, until 13 placements are made or nothing fits.
///
/// Returns the placements in order. A choice outside the legal set stops
/// the round with [`GameError::IllegalChooserMove`].
pub fn resolve(
    seat: usize,
    player: &mut Player,
    chooser: &mut dyn MoveChooser,
    think_time: Option<Duration>,
) -> Result<Vec<Move>, GameError> {
    let mut placed = Vec::with_capacity(FANTASYLAND_PLACEMENTS);
    for _ in 0..FANTASYLAND_PLACEMENTS {
        let legal = legal_moves(player.board(), player.hand());
        if legal.is_empty() {
            break;
        }
        let choice = chooser.choose_move(&ChoiceRequest {
            seat,
            board: player.board(),
            hand: player.hand(),
            legal_moves: &legal,
            opponent_board: None,
            think_time,
        });
        if !legal.contains(&choice) {
            error!(
                seat,
                card = %choice.card,
                street = %choice.street,
                chooser = chooser.name(),
                "chooser returned a move outside the legal set during fantasyland"
            );
            return Err(GameError::IllegalChooserMove {
                player: seat,
                card: choice.card,
                street: choice.street,
            });
        }
        player.place_from_hand(seat, choice.card, choice.street)?;
        debug!(seat, card = %choice.card, street = %choice.street, "fantasyland placement");
        placed.push(choice);
    }
    Ok(placed)
}
