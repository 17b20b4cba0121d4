//! Alpha-beta engine playing black.

use log::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::{board::Board, chess_types::*};
use crate::search::board_scoring::{Score, NEG_INFINITY, POS_INFINITY};
use crate::search::minimax::{MinimaxSearch, SearchConfig, SEARCH_SIDE};

/// `cp N` for a real evaluation, `none` for the +/-inf sentinels.
fn score_field(score: Score) -> String {
    match score {
        NEG_INFINITY | POS_INFINITY => "none".to_string(),
        cp => format!("cp {cp}"),
    }
}

pub struct MinimaxEngine {
    search: MinimaxSearch,
}

impl MinimaxEngine {
    /// Root candidates are shuffled from the thread RNG.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::with_entropy(config),
        }
    }

    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            search: MinimaxSearch::with_seed(config, seed),
        }
    }

    pub fn deterministic(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Slate Minimax"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String> {
        if side != SEARCH_SIDE {
            return Err(format!("minimax engine only plays {SEARCH_SIDE}, asked to play {side}"));
        }

        let result = self.search.search(board);
        debug!(
            "minimax_engine picked {:?} score {} nodes {}",
            result.best_move, result.best_score, result.nodes
        );

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            self.search.config().max_depth,
            score_field(result.best_score),
            result.nodes,
            result.elapsed_ms
        ));
        if let Some(mv) = result.best_move {
            out.info_lines.push(format!("info pv {mv}"));
        }
        Ok(out)
    }
}
