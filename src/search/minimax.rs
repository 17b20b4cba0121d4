//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Black is the maximizing root. Scores come from a `BoardScorer` and are
//! absolute (positive favors white), so the root picks the black move with the
//! highest score and every white ply minimizes.
//!
//! The tree is walked on one scratch copy of the caller's board using
//! `make_move_with_undo` / `unmake_move`; the caller's board is never touched.
//! Root candidates are shuffled only when the searcher owns a random source,
//! otherwise they are visited in enumeration order and ties go to the first
//! move seen.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::move_generator::enumerate_moves;
use crate::search::board_scoring::{
    BoardScorer, MaterialCenterScorer, PieceValues, Score, NEG_INFINITY, POS_INFINITY,
};

/// The side whose move `get_best_move` selects.
pub const SEARCH_SIDE: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root, root move included. Values below 1 are
    /// treated as 1.
    pub max_depth: u8,
    pub piece_values: PieceValues,
    pub center_control_bonus: Score,
    /// When false every sibling is searched (plain minimax). The chosen move
    /// and its score do not change, only the node count.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            piece_values: PieceValues::default(),
            center_control_bonus: 10,
            alpha_beta: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn scorer(&self) -> MaterialCenterScorer {
        MaterialCenterScorer::new(self.piece_values, self.center_control_bonus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: Score,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

pub struct MinimaxSearch<S: BoardScorer = MaterialCenterScorer> {
    config: SearchConfig,
    scorer: S,
    rng: Option<StdRng>,
}

impl MinimaxSearch<MaterialCenterScorer> {
    /// Deterministic searcher: no shuffle, first-seen tie-break.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, config.scorer(), None)
    }

    /// Shuffles root candidates with a reproducible stream.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_scorer(config, config.scorer(), Some(StdRng::seed_from_u64(seed)))
    }

    /// Shuffles root candidates with a stream seeded from the thread RNG.
    pub fn with_entropy(config: SearchConfig) -> Self {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_scorer(config, config.scorer(), Some(rng))
    }
}

impl Default for MinimaxSearch<MaterialCenterScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S, rng: Option<StdRng>) -> Self {
        Self {
            config,
            scorer,
            rng,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn evaluate(&self, board: &Board) -> Score {
        self.scorer.score(board)
    }

    #[inline]
    pub fn enumerate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        enumerate_moves(board, color)
    }

    /// Best black move. `None` when black has no move, or when every black
    /// move scores the `NEG_INFINITY` sentinel.
    pub fn get_best_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    pub fn search(&mut self, board: &Board) -> SearchResult {
        let started = Instant::now();
        let child_depth = self.config.max_depth.max(1) - 1;

        let mut candidates = enumerate_moves(board, SEARCH_SIDE);
        if let Some(rng) = self.rng.as_mut() {
            candidates.shuffle(rng);
        }

        let mut scratch = board.clone();
        let mut nodes = 0u64;
        let mut alpha = NEG_INFINITY;
        let beta = POS_INFINITY;
        let mut best: Option<(Move, Score)> = None;

        for mv in candidates {
            let Some(undo) = scratch.make_move_with_undo(mv.start, mv.end) else {
                continue;
            };
            let score = self.minimax_in_place(&mut scratch, child_depth, alpha, beta, false, &mut nodes);
            scratch.unmake_move(undo);
            trace!("root candidate {mv} score {score}");

            // Strictly greater than the best so far, starting from the -inf
            // sentinel: a root where every candidate scores -inf picks nothing.
            let best_score = best.map_or(NEG_INFINITY, |(_, s)| s);
            if score > best_score {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            best_score: best.map_or(NEG_INFINITY, |(_, score)| score),
            nodes,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        debug!(
            "search depth {} best {:?} score {} nodes {} time {}ms",
            self.config.max_depth, result.best_move, result.best_score, result.nodes, result.elapsed_ms
        );
        result
    }

    /// Minimax value of `board` searched `depth` plies deep. Black moves on
    /// maximizing plies, white on minimizing ones. A side with no move returns
    /// the untouched sentinel (`NEG_INFINITY` / `POS_INFINITY`).
    pub fn minimax(&self, board: &Board, depth: u8, alpha: Score, beta: Score, maximizing: bool) -> Score {
        let mut scratch = board.clone();
        let mut nodes = 0u64;
        self.minimax_in_place(&mut scratch, depth, alpha, beta, maximizing, &mut nodes)
    }

    fn minimax_in_place(
        &self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;
        if depth == 0 {
            return self.scorer.score(board);
        }

        let side = if maximizing { Color::Black } else { Color::White };
        let moves = enumerate_moves(board, side);

        if maximizing {
            let mut value = NEG_INFINITY;
            for mv in moves {
                let Some(undo) = board.make_move_with_undo(mv.start, mv.end) else {
                    continue;
                };
                let child = self.minimax_in_place(board, depth - 1, alpha, beta, false, nodes);
                board.unmake_move(undo);

                value = value.max(child);
                alpha = alpha.max(child);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = POS_INFINITY;
            for mv in moves {
                let Some(undo) = board.make_move_with_undo(mv.start, mv.end) else {
                    continue;
                };
                let child = self.minimax_in_place(board, depth - 1, alpha, beta, true, nodes);
                board.unmake_move(undo);

                value = value.min(child);
                beta = beta.min(child);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}
