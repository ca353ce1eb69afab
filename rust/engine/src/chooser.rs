//! The decision capability the engine consults for automated seats and for
//! Fantasyland resolution.

use std::time::Duration;

use crate::board::Board;
use crate::cards::Card;
use crate::rules::Move;

/// Everything a chooser gets to see for one decision.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRequest<'a> {
    /// Seat the decision is for
    pub seat: usize,
    /// The acting player's board (the fresh Fantasyland board during resolution)
    pub board: &'a Board,
    /// Cards the acting player still holds
    pub hand: &'a [Card],
    /// Never empty; the answer must be one of these
    pub legal_moves: &'a [Move],
    /// Board of the next seat in turn order, when one is shown
    pub opponent_board: Option<&'a Board>,
    /// Advisory budget; the engine does not enforce it
    pub think_time: Option<Duration>,
}

/// Trait defining the interface for move choosers.
///
/// Implementors must return exactly one element of `request.legal_moves`.
/// Anything else is reported by the engine as
/// [`GameError::IllegalChooserMove`](crate::errors::GameError::IllegalChooserMove)
/// and aborts the hand.
///
/// # Example Implementation
///
/// ```rust
/// use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
/// use pineapple_engine::rules::Move;
///
/// struct FirstLegal;
///
/// impl MoveChooser for FirstLegal {
///     fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
///         request.legal_moves[0]
///     }
///
///     fn name(&self) -> &str {
///         "FirstLegal"
///     }
/// }
/// ```
pub trait MoveChooser: Send {
    /// Pick one placement from `request.legal_moves`.
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move;

    /// Return the name/identifier of this chooser implementation.
    fn name(&self) -> &str;
}

impl<T: MoveChooser + ?Sized> MoveChooser for Box<T> {
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
        (**self).choose_move(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
