use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluated strength of one street.
///
/// Ordering is category first, then `kickers` lexicographically. The kickers
/// list the grouped ranks (quads, trips, pairs) before the loose cards, each
/// block high to low, zero padded. A wheel counts its Ace as 1.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

impl HandValue {
    /// Rank of the largest matched group, for categories built on one.
    pub fn paired_rank(&self) -> Option<Rank> {
        match self.category {
            Category::OnePair
            | Category::TwoPair
            | Category::ThreeOfAKind
            | Category::FullHouse
            | Category::FourOfAKind => Rank::from_u8(self.kickers[0]),
            _ => None,
        }
    }
}

/// Fewest cards that can form a straight or a flush.
const MIN_RUN: usize = 3;
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// Classifies a street (3 or 5 cards; any count is accepted) into a category
/// with its tie-break key. Pure: depends only on `cards`.
pub fn evaluate_hand(cards: &[Card]) -> HandValue {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[rank_val(c.rank) as usize] += 1;
    }

    // (count, rank), biggest group first, higher rank first within a size
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let flush = is_flush(cards);
    let straight = straight_ranks(cards.len(), &rank_counts);

    if flush {
        if let Some(ranks) = straight {
            return HandValue {
                category: Category::StraightFlush,
                kickers: ranks,
            };
        }
    }

    let top = groups.first().map_or(0, |g| g.0);
    let second = groups.get(1).map_or(0, |g| g.0);
    let grouped = kickers_from_groups(&groups);

    let category = if top >= 4 {
        Category::FourOfAKind
    } else if top == 3 && second >= 2 {
        Category::FullHouse
    } else if flush {
        Category::Flush
    } else if let Some(ranks) = straight {
        return HandValue {
            category: Category::Straight,
            kickers: ranks,
        };
    } else if top == 3 {
        Category::ThreeOfAKind
    } else if top == 2 && second == 2 {
        Category::TwoPair
    } else if top == 2 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    HandValue {
        category,
        kickers: grouped,
    }
}

pub fn compare_hands(a: &HandValue, b: &HandValue) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Evaluates both card sets and compares them.
pub fn compare_cards(a: &[Card], b: &[Card]) -> Ordering {
    compare_hands(&evaluate_hand(a), &evaluate_hand(b))
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn is_flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) if cards.len() >= MIN_RUN => rest.iter().all(|c| c.suit == first.suit),
        _ => false,
    }
}

/// Straight ranks high to low when all `len` cards are distinct and
/// consecutive (or form the wheel); Ace plays low in the wheel.
fn straight_ranks(len: usize, rank_counts: &[u8; 15]) -> Option<[u8; 5]> {
    if len < MIN_RUN || len > 5 {
        return None;
    }
    let mut asc: Vec<u8> = Vec::with_capacity(len);
    for r in 2..=14u8 {
        match rank_counts[r as usize] {
            0 => {}
            1 => asc.push(r),
            _ => return None,
        }
    }
    let consecutive = asc.windows(2).all(|w| w[1] == w[0] + 1);
    let mut desc: Vec<u8> = if consecutive {
        asc.iter().rev().copied().collect()
    } else if asc[..] == WHEEL[..] {
        vec![5, 4, 3, 2, 1]
    } else {
        return None;
    };
    desc.resize(5, 0);
    let mut k = [0u8; 5];
    k.copy_from_slice(&desc);
    Some(k)
}

fn kickers_from_groups(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, &(_, rank)) in k.iter_mut().zip(groups) {
        *slot = rank;
    }
    k
}
