//! Head-to-head driver for two `Engine`s on a live board.
//!
//! White moves first. Moves are applied with `Board::make_move`; an engine
//! proposing a move the board rejects aborts the match with an error. There is
//! no check detection, so a game also ends when a king is captured.

use std::time::Instant;

use log::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::{board::Board, chess_types::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    KingCaptured { winner: Color },
    NoMoves { side: Color },
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub moves: Vec<Move>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchRecord {
    pub fn report(&self) -> String {
        let moves: Vec<String> = self.moves.iter().map(Move::to_string).collect();
        format!(
            "outcome={:?} plies={} white_ms={:.3} black_ms={:.3}\nmoves: {}",
            self.outcome,
            self.moves.len(),
            self.white_total_time_ns as f64 / 1e6,
            self.black_total_time_ns as f64 / 1e6,
            moves.join(" ")
        )
    }
}

pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: MatchConfig,
) -> Result<MatchRecord, String> {
    play_engine_match_from(Board::new(), engine_white, engine_black, config)
}

/// Plays from an arbitrary position, white to move.
pub fn play_engine_match_from(
    mut board: Board,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: MatchConfig,
) -> Result<MatchRecord, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut moves = Vec::new();
    let mut times = [0u128; 2];
    let mut side = Color::White;

    let outcome = loop {
        if moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let engine: &mut dyn Engine = match side {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let output = engine.choose_move(&board, side)?;
        times[side.index()] += started.elapsed().as_nanos();

        let Some(mv) = output.best_move else {
            break MatchOutcome::NoMoves { side };
        };

        let captured = board.piece_at(mv.end);
        if !board.make_move(mv.start, mv.end) {
            return Err(format!("{} proposed illegal move {mv}", engine.name()));
        }
        debug!("ply {} {side} {} plays {mv}", moves.len() + 1, engine.name());
        moves.push(mv);

        if captured.is_some_and(|p| p.kind == PieceKind::King) {
            break MatchOutcome::KingCaptured { winner: side };
        }
        side = side.opposite();
    };

    Ok(MatchRecord {
        outcome,
        final_board: board,
        moves,
        white_total_time_ns: times[Color::White.index()],
        black_total_time_ns: times[Color::Black.index()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::search::minimax::SearchConfig;

    struct Scripted {
        moves: Vec<Move>,
    }

    impl Engine for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _board: &Board, _side: Color) -> Result<EngineOutput, String> {
            Ok(EngineOutput {
                best_move: if self.moves.is_empty() {
                    None
                } else {
                    Some(self.moves.remove(0))
                },
                ..EngineOutput::default()
            })
        }
    }

    #[test]
    fn random_vs_minimax_plays_legal_moves_until_limit_or_end() {
        let mut white = RandomEngine::with_seed(4);
        let mut black = MinimaxEngine::with_seed(SearchConfig::with_depth(2), 4);
        let record = play_engine_match(&mut white, &mut black, MatchConfig { max_plies: 12 })
            .expect("match runs");

        assert!(record.moves.len() <= 12);
        if record.outcome == MatchOutcome::MaxPlies {
            assert_eq!(record.moves.len(), 12);
        }

        let mut replay = Board::new();
        for mv in &record.moves {
            assert!(replay.make_move(mv.start, mv.end), "{mv} not legal on replay");
        }
        assert_eq!(replay, record.final_board);
    }

    #[test]
    fn king_capture_ends_match() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1").expect("valid");
        let mut white = Scripted {
            moves: vec![Move::new((7, 4), (0, 4))],
        };
        let mut black = RandomEngine::with_seed(0);
        let record = play_engine_match_from(board, &mut white, &mut black, MatchConfig::default())
            .expect("match runs");
        assert_eq!(record.outcome, MatchOutcome::KingCaptured { winner: Color::White });
        assert_eq!(record.moves.len(), 1);
    }

    #[test]
    fn side_without_moves_ends_match() {
        let mut white = Scripted { moves: Vec::new() };
        let mut black = RandomEngine::with_seed(0);
        let record = play_engine_match(&mut white, &mut black, MatchConfig::default())
            .expect("match runs");
        assert_eq!(record.outcome, MatchOutcome::NoMoves { side: Color::White });
        assert_eq!(record.final_board, Board::new());
    }

    #[test]
    fn illegal_proposal_is_an_error() {
        let mut white = Scripted {
            moves: vec![Move::new((7, 0), (3, 0))],
        };
        let mut black = RandomEngine::with_seed(0);
        let err = play_engine_match(&mut white, &mut black, MatchConfig::default()).unwrap_err();
        assert!(err.contains("a1a5"));
    }
}
