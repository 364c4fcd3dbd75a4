//! Random-move opponent.
//!
//! Selects uniformly from every generated move of the side to move. Used as
//! the optional opponent in the text front end and in tests.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_all_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Pseudo Chess Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<(Square, Square)> {
        let moves = generate_all_moves(game_state.board(), game_state.turn());
        debug!(
            "random engine: {} candidate moves for {}",
            moves.len(),
            game_state.turn()
        );
        moves.as_slice().choose(&mut self.rng).copied()
    }
}
