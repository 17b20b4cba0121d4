use crate::game_state::chess_types::Square;

/// One step in any direction. No castling.
#[inline]
pub fn is_valid_king_move(start: Square, end: Square) -> bool {
    (end.row - start.row).abs() <= 1 && (end.col - start.col).abs() <= 1
}
