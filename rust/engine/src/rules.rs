use serde::{Deserialize, Serialize};

use crate::board::{Board, Street};
use crate::cards::Card;
use crate::errors::GameError;

/// A single placement: put `card` on `street`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub street: Street,
}

impl Move {
    pub fn new(card: Card, street: Street) -> Self {
        Self { card, street }
    }
}

/// Enumerates every legal placement for `hand` against `board`.
///
/// Candidates are ordered by hand position, then front, middle, back.
/// An empty result means the hand is empty or the board is complete.
///
/// # Examples
///
/// ```
/// use pineapple_engine::board::{Board, Street};
/// use pineapple_engine::cards::{Card, Rank, Suit};
/// use pineapple_engine::rules::legal_moves;
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Two, Suit::Clubs)];
/// let moves = legal_moves(&Board::new(), &hand);
/// assert_eq!(moves.len(), 6);
/// assert_eq!(moves[0].street, Street::Front);
/// ```
pub fn legal_moves(board: &Board, hand: &[Card]) -> Vec<Move> {
    let streets = board.free_streets(hand.len());
    hand.iter()
        .flat_map(|&card| streets.iter().map(move |&street| Move { card, street }))
        .collect()
}

/// Checks a placement against a hand and board without changing either.
///
/// # Errors
///
/// - [`GameError::CardNotInHand`] - `card` is not held by the seat
/// - [`GameError::StreetFull`] - `street` has no room left
///
/// ```
/// use pineapple_engine::board::{Board, Street};
/// use pineapple_engine::cards::{Card, Rank, Suit};
/// use pineapple_engine::errors::GameError;
/// use pineapple_engine::rules::validate_placement;
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let king = Card::new(Rank::King, Suit::Spades);
/// let board = Board::new();
///
/// assert!(validate_placement(0, &board, &[ace], ace, Street::Back).is_ok());
/// assert!(matches!(
///     validate_placement(0, &board, &[ace], king, Street::Back),
///     Err(GameError::CardNotInHand { .. })
/// ));
/// ```
pub fn validate_placement(
    seat: usize,
    board: &Board,
    hand: &[Card],
    card: Card,
    street: Street,
) -> Result<Move, GameError> {
    if !hand.contains(&card) {
        return Err(GameError::CardNotInHand { player: seat, card });
    }
    if !board.has_room(street) {
        return Err(GameError::StreetFull { street });
    }
    Ok(Move { card, street })
}
