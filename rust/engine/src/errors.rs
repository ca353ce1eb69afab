use thiserror::Error;

use crate::board::Street;
use crate::cards::Card;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card {card} is not in player {player}'s hand")]
    CardNotInHand { player: usize, card: Card },
    #[error("{street} street is full")]
    StreetFull { street: Street },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("Unknown street: {0:?}")]
    UnknownStreet(String),
    #[error("Unknown player index {index} (table has {players} players)")]
    UnknownPlayer { index: usize, players: usize },
    #[error("No game in progress")]
    NoGameInProgress,
    #[error("A game needs between {min} and {max} players, got {actual}")]
    InvalidPlayerCount { actual: usize, min: usize, max: usize },
    #[error("Chooser returned illegal move {card} -> {street} for player {player}")]
    IllegalChooserMove {
        player: usize,
        card: Card,
        street: Street,
    },
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Card {0} appears more than once in the deck")]
    DuplicateCard(Card),
}

impl GameError {
    /// Internal inconsistencies abort the current hand; everything else is a
    /// rejected request that leaves the game untouched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::IllegalChooserMove { .. } | GameError::DeckExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn only_internal_errors_are_fatal() {
        let card = Card::new(Rank::Two, Suit::Clubs);
        assert!(GameError::DeckExhausted {
            requested: 3,
            remaining: 1
        }
        .is_fatal());
        assert!(GameError::IllegalChooserMove {
            player: 1,
            card,
            street: Street::Back
        }
        .is_fatal());
        assert!(!GameError::CardNotInHand { player: 0, card }.is_fatal());
        assert!(!GameError::StreetFull {
            street: Street::Front
        }
        .is_fatal());
        assert!(!GameError::NotYourTurn {
            expected: 0,
            actual: 1
        }
        .is_fatal());
        assert!(!GameError::UnknownStreet("side".into()).is_fatal());
        assert!(!GameError::DuplicateCard(card).is_fatal());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = GameError::NotYourTurn {
            expected: 0,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "It's not player 1's turn (expected player 0)"
        );
        let err = GameError::StreetFull {
            street: Street::Middle,
        };
        assert_eq!(err.to_string(), "middle street is full");
    }
}
