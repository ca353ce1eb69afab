//! # pineapple-engine: Pineapple Open-Face Chinese Poker Core
//!
//! A deterministic engine for Pineapple OFC with two to four seats. Each
//! player builds a 13-card board across three streets (front 3, middle 5,
//! back 5); boards are compared street by street at the end of the game.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - Shuffled deck with ChaCha20 RNG
//! - [`board`] - Streets and the three-street board
//! - [`hand`] - Street evaluation and strength comparison (3 or 5 cards)
//! - [`player`] - Seats, hands and cumulative scores
//! - [`rules`] - Legal placements and placement validation
//! - [`chooser`] - The move-chooser trait for automated decisions
//! - [`game`] - Turn order, phases and the game state machine
//! - [`fantasyland`] - Fantasyland trigger and resolution round
//! - [`scoring`] - Pairwise street comparison and scoop bonus
//! - [`snapshot`] - Serializable views of the table
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pineapple_engine::cards::Card;
//! use pineapple_engine::hand::{evaluate_hand, Category};
//!
//! let front: Vec<Card> = ["Qs", "Qd", "7c"].iter().map(|s| s.parse().unwrap()).collect();
//! let value = evaluate_hand(&front);
//! assert_eq!(value.category, Category::OnePair);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A seeded [`game::GameConfig`] reproduces every shuffle of a session:
//!
//! ```rust
//! use pineapple_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let a = Deck::build(&mut ChaCha20Rng::seed_from_u64(42));
//! let b = Deck::build(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a.cards(), b.cards());
//! ```
//!
//! ## Placement Validation
//!
//! ```rust
//! use pineapple_engine::board::{Board, Street};
//! use pineapple_engine::cards::Card;
//! use pineapple_engine::rules::validate_placement;
//!
//! let ace: Card = "As".parse().unwrap();
//! match validate_placement(0, &Board::new(), &[ace], ace, Street::Front) {
//!     Ok(mv) => println!("Valid placement: {:?}", mv),
//!     Err(e) => println!("Rejected: {}", e),
//! }
//! ```

pub mod board;
pub mod cards;
pub mod chooser;
pub mod deck;
pub mod errors;
pub mod fantasyland;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod snapshot;
