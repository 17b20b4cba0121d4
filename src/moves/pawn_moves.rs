//! Pawn rule: single push, unmoved double push, diagonal capture.
//! No en passant and no promotion.

use crate::game_state::{board::Board, chess_types::*};

pub fn is_valid_pawn_move(board: &Board, pawn: Piece, start: Square, end: Square) -> bool {
    let direction = pawn.color.pawn_direction();
    let d_row = end.row - start.row;
    let d_col = end.col - start.col;

    if d_col == 0 && d_row == direction {
        return board.piece_at(end).is_none();
    }

    if d_col == 0 && d_row == 2 * direction && !pawn.has_moved {
        return board.piece_at(start.offset(direction, 0)).is_none()
            && board.piece_at(end).is_none();
    }

    if d_col.abs() == 1 && d_row == direction {
        return board
            .piece_at(end)
            .is_some_and(|target| target.color != pawn.color);
    }

    false
}
