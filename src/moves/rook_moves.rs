use crate::game_state::{board::Board, chess_types::Square};
use crate::moves::sliding::path_is_clear;

pub fn is_valid_rook_move(board: &Board, start: Square, end: Square) -> bool {
    (start.row == end.row || start.col == end.col) && path_is_clear(board, start, end)
}
