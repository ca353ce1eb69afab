//! End-of-game scoring: every pair of seats compares street against street.
//! A street win is worth one point, winning all three adds the scoop bonus.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Street};
use crate::hand::{compare_hands, evaluate_hand, HandValue};

/// Points per street won.
pub const STREET_POINT: i32 = 1;
/// Extra points for winning all three streets against one opponent.
pub const SCOOP_BONUS: i32 = 3;

/// One street of one pairing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StreetComparison {
    pub street: Street,
    pub first: HandValue,
    pub second: HandValue,
    /// Seat index of the winner; `None` on a tie
    pub winner: Option<usize>,
}

/// Outcome of comparing two seats.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    pub first: usize,
    pub second: usize,
    pub streets: Vec<StreetComparison>,
    pub first_points: i32,
    pub second_points: i32,
    /// Seat that won every street, if any
    pub scoop: Option<usize>,
}

/// Scores seat `first` (board `a`) against seat `second` (board `b`).
pub fn score_pair(first: usize, a: &Board, second: usize, b: &Board) -> PairingResult {
    let mut streets = Vec::with_capacity(Street::ALL.len());
    let (mut first_wins, mut second_wins) = (0, 0);

    for street in Street::ALL {
        let va = evaluate_hand(a.street(street));
        let vb = evaluate_hand(b.street(street));
        let winner = match compare_hands(&va, &vb) {
            Ordering::Greater => {
                first_wins += 1;
                Some(first)
            }
            Ordering::Less => {
                second_wins += 1;
                Some(second)
            }
            Ordering::Equal => None,
        };
        streets.push(StreetComparison {
            street,
            first: va,
            second: vb,
            winner,
        });
    }

    let all = Street::ALL.len();
    let scoop = if first_wins == all {
        Some(first)
    } else if second_wins == all {
        Some(second)
    } else {
        None
    };

    let mut first_points = first_wins as i32 * STREET_POINT;
    let mut second_points = second_wins as i32 * STREET_POINT;
    match scoop {
        Some(s) if s == first => first_points += SCOOP_BONUS,
        Some(_) => second_points += SCOOP_BONUS,
        None => {}
    }

    PairingResult {
        first,
        second,
        streets,
        first_points,
        second_points,
        scoop,
    }
}

/// Scores every unordered pair of boards. Returns the pairings in
/// `(0,1), (0,2), .., (1,2), ..` order and the points each seat earned.
pub fn score_table(boards: &[&Board]) -> (Vec<PairingResult>, Vec<i32>) {
    let mut earned = vec![0; boards.len()];
    let mut pairings = Vec::new();
    for i in 0..boards.len() {
        for j in i + 1..boards.len() {
            let result = score_pair(i, boards[i], j, boards[j]);
            earned[i] += result.first_points;
            earned[j] += result.second_points;
            pairings.push(result);
        }
    }
    (pairings, earned)
}

/// Index of the highest score; the first such seat wins ties.
pub fn leader(scores: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}
