//! Pseudo-legal node counting for move-generator validation and benchmarks.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::move_generator::enumerate_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub king_captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
    }
}

/// Leaf count of the pseudo-legal tree of `depth` plies, `side` moving first.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    perft_counts(board, side, depth).nodes
}

pub fn perft_counts(board: &Board, side: Color, depth: u8) -> PerftCounts {
    let mut scratch = board.clone();
    perft_recurse(&mut scratch, side, depth)
}

fn perft_recurse(board: &mut Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in enumerate_moves(board, side) {
        let Some(undo) = board.make_move_with_undo(mv.start, mv.end) else {
            continue;
        };
        if depth == 1 {
            total.nodes += 1;
            if let Some(captured) = undo.captured_piece {
                total.captures += 1;
                if captured.kind == PieceKind::King {
                    total.king_captures += 1;
                }
            }
        } else {
            total.merge(perft_recurse(board, side.opposite(), depth - 1));
        }
        board.unmake_move(undo);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_from_start_position() {
        let board = Board::new();
        assert_eq!(perft(&board, Color::White, 0), 1);
        assert_eq!(perft(&board, Color::White, 1), 20);
        assert_eq!(perft(&board, Color::White, 2), 400);
        assert_eq!(perft(&board, Color::White, 3), 8902);
    }

    #[test]
    fn perft_counts_captures_at_depth_three() {
        let counts = perft_counts(&Board::new(), Color::White, 3);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.king_captures, 0);
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let board = Board::new();
        let before = board.clone();
        let _ = perft(&board, Color::Black, 2);
        assert_eq!(board, before);
    }
}
