//! Uniform random chooser, reproducible from a seed.

use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
use pineapple_engine::rules::Move;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: ChaCha20Rng,
}

impl RandomChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl MoveChooser for RandomChooser {
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
        let i = self.rng.random_range(0..request.legal_moves.len());
        request.legal_moves[i]
    }

    fn name(&self) -> &str {
        "RandomChooser"
    }
}
