//! Random-move engine.
//!
//! Selects uniformly among the enumerated moves of its side and is used as a
//! sparring partner and for driver tests.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::move_generator::enumerate_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

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
        "Slate Random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String> {
        let moves = enumerate_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        debug!("random_engine {side} picked {:?}", out.best_move);
        Ok(out)
    }
}
