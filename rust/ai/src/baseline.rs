//! Baseline chooser for Pineapple OFC.
//!
//! Provides a simple deterministic opponent that can be used for testing and
//! benchmarking. Each legal placement gets a score from the evaluator and the
//! best one wins; ties go to the earliest legal move.

use pineapple_engine::board::{Board, Street};
use pineapple_engine::cards::Rank;
use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
use pineapple_engine::hand::{evaluate_hand, Category, HandValue};
use pineapple_engine::rules::Move;

/// Weight of one category step relative to a single rank step.
const CATEGORY_WEIGHT: i32 = 100;
/// Bonus for a front pair that reaches Fantasyland.
const FANTASYLAND_BONUS: i32 = 250;
/// Penalty when the front would outrank the middle, or the middle the back.
const ORDER_PENALTY: i32 = 300;

/// Simple baseline chooser implementation for testing and comparison.
///
/// # Strategy
///
/// - Improving a street's category is worth more on the back than on the
///   middle, and more on the middle than on the front
/// - High loose cards drift toward the back, low ones toward the front
/// - A front pair of Queens or better earns a large bonus
/// - Placements that leave a lower street weaker than the one above it are
///   penalised
///
/// # Example
///
/// ```rust
/// use pineapple_ai::baseline::BaselineChooser;
/// use pineapple_engine::board::{Board, Street};
/// use pineapple_engine::cards::Card;
/// use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
/// use pineapple_engine::rules::legal_moves;
///
/// let mut chooser = BaselineChooser::new();
/// let board = Board::new();
/// let hand: Vec<Card> = ["As", "2d"].iter().map(|s| s.parse().unwrap()).collect();
/// let legal = legal_moves(&board, &hand);
/// let choice = chooser.choose_move(&ChoiceRequest {
///     seat: 0,
///     board: &board,
///     hand: &hand,
///     legal_moves: &legal,
///     opponent_board: None,
///     think_time: None,
/// });
/// assert!(legal.contains(&choice));
/// assert_eq!(choice.street, Street::Back);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineChooser;

impl BaselineChooser {
    pub fn new() -> Self {
        Self
    }

    /// Scores placing `mv.card` on `mv.street` of `board`.
    fn score(board: &Board, mv: Move) -> i32 {
        let street = mv.street;
        let before = evaluate_hand(board.street(street));
        let mut cards = board.street(street).to_vec();
        cards.push(mv.card);
        let after = evaluate_hand(&cards);

        let category_gain = after.category as i32 - before.category as i32;
        let mut score = category_gain * CATEGORY_WEIGHT * Self::street_weight(street);
        score += Self::rank_fit(mv.card.rank, street);

        if street == Street::Front && Self::reaches_fantasyland(&after, cards.len()) {
            score += FANTASYLAND_BONUS;
        }
        if Self::breaks_order(board, street, &after) {
            score -= ORDER_PENALTY;
        }
        score
    }

    fn street_weight(street: Street) -> i32 {
        match street {
            Street::Front => 1,
            Street::Middle => 2,
            Street::Back => 3,
        }
    }

    /// Loose-card preference: high ranks belong low on the board.
    fn rank_fit(rank: Rank, street: Street) -> i32 {
        let v = rank.value() as i32;
        match street {
            Street::Front => 8 - v,
            Street::Middle => 0,
            Street::Back => v - 8,
        }
    }

    fn reaches_fantasyland(value: &HandValue, len: usize) -> bool {
        len <= Street::Front.capacity()
            && value.category >= Category::OnePair
            && value.paired_rank().is_some_and(|r| r >= Rank::Queen)
    }

    /// True when the new value of `street` beats the category of the street
    /// below it once that street is already full.
    fn breaks_order(board: &Board, street: Street, after: &HandValue) -> bool {
        let below = match street {
            Street::Front => Street::Middle,
            Street::Middle => Street::Back,
            Street::Back => return false,
        };
        if !board.is_full(below) {
            return false;
        }
        after.category > evaluate_hand(board.street(below)).category
    }
}

impl MoveChooser for BaselineChooser {
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
        let mut best = request.legal_moves[0];
        let mut best_score = i32::MIN;
        for &mv in request.legal_moves {
            let score = Self::score(request.board, mv);
            if score > best_score {
                best = mv;
                best_score = score;
            }
        }
        best
    }

    fn name(&self) -> &str {
        "BaselineChooser"
    }
}
