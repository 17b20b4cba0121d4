use crate::game_state::chess_types::*;

/// Single undo record for `make_move_with_undo` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub captured_piece: Option<Piece>,
    pub prev_has_moved: bool,
}
