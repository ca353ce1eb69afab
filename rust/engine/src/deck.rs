use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The undealt part of the 52-card universe. Cards come off the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// A full deck in a fresh uniform shuffle.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    /// A deck that deals `cards` in the given order, first element on top.
    /// Intended for scripted deals and replays.
    ///
    /// `cards` may be shorter than 52 but must not repeat a card.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(&dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(GameError::DuplicateCard(dup));
        }
        Ok(Self { cards, position: 0 })
    }

    /// Removes and returns the top `n` cards, or nothing at all if fewer remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The undealt cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.position = 0;
    }
}
