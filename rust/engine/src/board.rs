use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// One of the three rows of a player's board.
/// Streets fill front to back; each has a fixed capacity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Top row, 3 cards
    Front,
    /// Middle row, 5 cards
    Middle,
    /// Bottom row, 5 cards
    Back,
}

impl Street {
    pub const ALL: [Street; 3] = [Street::Front, Street::Middle, Street::Back];

    pub fn capacity(self) -> usize {
        match self {
            Street::Front => 3,
            Street::Middle | Street::Back => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Front => "front",
            Street::Middle => "middle",
            Street::Back => "back",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Street {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" | "f" | "top" => Ok(Street::Front),
            "middle" | "mid" | "m" => Ok(Street::Middle),
            "back" | "b" | "bottom" => Ok(Street::Back),
            _ => Err(GameError::UnknownStreet(s.to_string())),
        }
    }
}

/// Total number of cards a complete board holds.
pub const BOARD_SIZE: usize = 13;

/// A player's three streets.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub front: Vec<Card>,
    pub middle: Vec<Card>,
    pub back: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            front: Vec::with_capacity(Street::Front.capacity()),
            middle: Vec::with_capacity(Street::Middle.capacity()),
            back: Vec::with_capacity(Street::Back.capacity()),
        }
    }

    pub fn street(&self, street: Street) -> &[Card] {
        match street {
            Street::Front => &self.front,
            Street::Middle => &self.middle,
            Street::Back => &self.back,
        }
    }

    fn street_mut(&mut self, street: Street) -> &mut Vec<Card> {
        match street {
            Street::Front => &mut self.front,
            Street::Middle => &mut self.middle,
            Street::Back => &mut self.back,
        }
    }

    pub fn has_room(&self, street: Street) -> bool {
        self.street(street).len() < street.capacity()
    }

    pub fn is_full(&self, street: Street) -> bool {
        !self.has_room(street)
    }

    /// Appends `card` to `street`. A full street is left untouched.
    pub fn place(&mut self, street: Street, card: Card) -> Result<(), GameError> {
        if !self.has_room(street) {
            return Err(GameError::StreetFull { street });
        }
        self.street_mut(street).push(card);
        Ok(())
    }

    /// Streets that can still take a card. The hand size does not filter
    /// anything; it is accepted so move generation reads symmetrically.
    pub fn free_streets(&self, _hand_size: usize) -> Vec<Street> {
        Street::ALL
            .into_iter()
            .filter(|&s| self.has_room(s))
            .collect()
    }

    pub fn free_slots(&self) -> usize {
        Street::ALL
            .iter()
            .map(|&s| s.capacity() - self.street(s).len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.front.len() + self.middle.len() + self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        Street::ALL.iter().all(|&s| self.is_full(s))
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.front.iter().chain(&self.middle).chain(&self.back)
    }

    /// Empties the board, handing back every card it held.
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.len());
        for street in Street::ALL {
            cards.append(self.street_mut(street));
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn capacities_match_layout() {
        assert_eq!(Street::Front.capacity(), 3);
        assert_eq!(Street::Middle.capacity(), 5);
        assert_eq!(Street::Back.capacity(), 5);
        let total: usize = Street::ALL.iter().map(|s| s.capacity()).sum();
        assert_eq!(total, BOARD_SIZE);
    }

    #[test]
    fn place_rejects_overflow_and_leaves_street_unchanged() {
        let mut board = Board::new();
        board.place(Street::Front, c(Rank::Two, Suit::Clubs)).unwrap();
        board.place(Street::Front, c(Rank::Three, Suit::Clubs)).unwrap();
        board.place(Street::Front, c(Rank::Four, Suit::Clubs)).unwrap();
        let before = board.front.clone();

        let err = board
            .place(Street::Front, c(Rank::Five, Suit::Clubs))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::StreetFull {
                street: Street::Front
            }
        );
        assert_eq!(board.front, before);
    }

    #[test]
    fn back_placement_lands_on_back_street() {
        let mut board = Board::new();
        board.place(Street::Back, c(Rank::Ace, Suit::Spades)).unwrap();
        assert_eq!(board.back, vec![c(Rank::Ace, Suit::Spades)]);
        assert!(board.front.is_empty());
        assert!(board.middle.is_empty());
    }

    #[test]
    fn free_streets_ignores_hand_size() {
        let mut board = Board::new();
        for r in [Rank::Two, Rank::Three, Rank::Four] {
            board.place(Street::Front, c(r, Suit::Hearts)).unwrap();
        }
        assert_eq!(board.free_streets(0), vec![Street::Middle, Street::Back]);
        assert_eq!(board.free_streets(14), vec![Street::Middle, Street::Back]);
        assert_eq!(board.free_slots(), 10);
    }

    #[test]
    fn complete_after_thirteen_cards() {
        let mut board = Board::new();
        let mut cards = crate::cards::full_deck().into_iter();
        for street in Street::ALL {
            for _ in 0..street.capacity() {
                assert!(!board.is_complete());
                board.place(street, cards.next().unwrap()).unwrap();
            }
        }
        assert!(board.is_complete());
        assert_eq!(board.len(), BOARD_SIZE);
        assert!(board.free_streets(1).is_empty());
        assert_eq!(board.take_all().len(), BOARD_SIZE);
        assert!(board.is_empty());
    }

    #[test]
    fn parses_street_names() {
        assert_eq!("FRONT".parse::<Street>(), Ok(Street::Front));
        assert_eq!("mid".parse::<Street>(), Ok(Street::Middle));
        assert_eq!("b".parse::<Street>(), Ok(Street::Back));
        assert_eq!(
            "side".parse::<Street>(),
            Err(GameError::UnknownStreet("side".into()))
        );
    }
}
