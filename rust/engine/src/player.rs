use crate::board::{Board, Street};
use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Who makes the decisions for a seat.
/// Automated seats are driven by the game's move chooser.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Controller {
    /// Moves arrive through `Game::submit_move`
    Human,
    /// Moves are picked by the registered chooser
    Automated,
}

/// A seat at the table: hand, board and the score carried across games.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    controller: Controller,
    hand: Vec<Card>,
    board: Board,
    score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
            hand: Vec::new(),
            board: Board::new(),
            score: 0,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Controller::Human)
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, Controller::Automated)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn controller(&self) -> Controller {
        self.controller
    }
    pub fn is_automated(&self) -> bool {
        self.controller == Controller::Automated
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    pub fn give_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Moves `card` from the hand onto `street`. On error nothing moves.
    pub(crate) fn place_from_hand(
        &mut self,
        seat: usize,
        card: Card,
        street: Street,
    ) -> Result<(), GameError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand { player: seat, card })?;
        self.board.place(street, card)?;
        self.hand.remove(pos);
        Ok(())
    }

    /// Swaps in a new board, returning the old one.
    pub(crate) fn replace_board(&mut self, board: Board) -> Board {
        std::mem::replace(&mut self.board, board)
    }

    pub(crate) fn take_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    pub(crate) fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    pub(crate) fn add_score(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Drops hand and board; the score survives.
    pub(crate) fn clear_cards(&mut self) {
        self.hand.clear();
        self.board = Board::new();
    }
}
