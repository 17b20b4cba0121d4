use crate::game_state::chess_types::Square;

#[inline]
pub fn is_valid_knight_move(start: Square, end: Square) -> bool {
    let d_row = (end.row - start.row).abs();
    let d_col = (end.col - start.col).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
