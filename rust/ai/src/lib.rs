//! # pineapple-ai: Move Choosers for Pineapple OFC
//!
//! Implementations of the engine's [`MoveChooser`] capability plus a small
//! per-session registry that builds them by name.
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic heuristic chooser
//! - [`random`] - Seeded uniform random chooser
//! - [`seats`] - Dispatches each decision to a per-seat chooser
//! - [`ChooserRegistry`] - Name to factory table
//! - [`create_chooser`] - Builds a built-in chooser by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pineapple_ai::create_chooser;
//! use pineapple_engine::game::{Game, GameConfig};
//! use pineapple_engine::player::Player;
//!
//! let chooser = create_chooser("baseline", 42).expect("built-in chooser");
//! let players = vec![Player::automated("North"), Player::automated("South")];
//! let mut game = Game::new(players, chooser, GameConfig::default()).unwrap();
//! game.start().expect("game plays out");
//! assert!(game.is_over());
//! ```
//!
//! ## Chooser Types
//!
//! - `"baseline"` - Heuristic that builds strength bottom-up
//! - `"random"` - Uniform over the legal moves, reproducible from a seed

use std::collections::BTreeMap;

use pineapple_engine::chooser::MoveChooser;
use thiserror::Error;

pub mod baseline;
pub mod random;
pub mod seats;

pub use baseline::BaselineChooser;
pub use random::RandomChooser;
pub use seats::SeatChooser;

/// Builds a chooser from a seed. Deterministic choosers ignore it.
pub type ChooserFactory = fn(u64) -> Box<dyn MoveChooser>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown chooser {name:?} (available: {})", .available.join(", "))]
    UnknownChooser {
        name: String,
        available: Vec<String>,
    },
    #[error("Chooser {0:?} is already registered")]
    Duplicate(String),
}

/// Chooser kinds available to one session, looked up by name.
///
/// ```rust
/// use pineapple_ai::{ChooserRegistry, RegistryError};
///
/// let registry = ChooserRegistry::default();
/// assert_eq!(registry.names(), vec!["baseline", "random"]);
/// assert!(matches!(
///     registry.build("oracle", 0),
///     Err(RegistryError::UnknownChooser { .. })
/// ));
/// ```
#[derive(Clone)]
pub struct ChooserRegistry {
    factories: BTreeMap<String, ChooserFactory>,
}

impl ChooserRegistry {
    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: ChooserFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into().to_ascii_lowercase();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Builds the chooser registered under `name` (case-insensitive).
    pub fn build(&self, name: &str, seed: u64) -> Result<Box<dyn MoveChooser>, RegistryError> {
        let key = name.trim().to_ascii_lowercase();
        match self.factories.get(&key) {
            Some(factory) => Ok(factory(seed)),
            None => Err(RegistryError::UnknownChooser {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories
            .contains_key(&name.trim().to_ascii_lowercase())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl Default for ChooserRegistry {
    /// The built-in choosers.
    fn default() -> Self {
        let mut factories: BTreeMap<String, ChooserFactory> = BTreeMap::new();
        factories.insert("baseline".into(), baseline_factory);
        factories.insert("random".into(), random_factory);
        Self { factories }
    }
}

fn baseline_factory(_seed: u64) -> Box<dyn MoveChooser> {
    Box::new(BaselineChooser::new())
}

fn random_factory(seed: u64) -> Box<dyn MoveChooser> {
    Box::new(RandomChooser::new(seed))
}

impl std::fmt::Debug for ChooserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChooserRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Factory function to create built-in choosers by type string.
///
/// # Example
///
/// ```rust
/// use pineapple_ai::create_chooser;
///
/// let chooser = create_chooser("baseline", 0).unwrap();
/// assert_eq!(chooser.name(), "BaselineChooser");
/// assert!(create_chooser("nope", 0).is_err());
/// ```
pub fn create_chooser(name: &str, seed: u64) -> Result<Box<dyn MoveChooser>, RegistryError> {
    ChooserRegistry::default().build(name, seed)
}
