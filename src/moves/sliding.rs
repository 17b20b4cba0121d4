//! Path scanning shared by the sliding pieces.

use crate::game_state::{board::Board, chess_types::Square};

/// True when every cell strictly between `start` and `end` is empty.
///
/// The two squares must share a row, a column, or a diagonal. The occupant of
/// `end` is not inspected.
pub fn path_is_clear(board: &Board, start: Square, end: Square) -> bool {
    let d_row = (end.row - start.row).signum();
    let d_col = (end.col - start.col).signum();
    if d_row == 0 && d_col == 0 {
        return false;
    }

    let mut current = start.offset(d_row, d_col);
    while current != end {
        if !current.is_on_board() || board.piece_at(current).is_some() {
            return false;
        }
        current = current.offset(d_row, d_col);
    }
    true
}
