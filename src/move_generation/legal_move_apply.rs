//! Reversible move application.
//!
//! Search walks the game tree on a single scratch board, pairing every
//! `make_move_with_undo` with an `unmake_move` so that each branch observes
//! exactly the position a fresh copy would have given it.

use crate::game_state::{board::Board, chess_types::*, undo_state::UndoState};

impl Board {
    /// Same validation and effect as `make_move`, returning what is needed
    /// to take the move back.
    pub fn make_move_with_undo(
        &mut self,
        start: impl Into<Square>,
        end: impl Into<Square>,
    ) -> Option<UndoState> {
        let (start, end) = (start.into(), end.into());
        if !self.is_valid_move(start, end) {
            return None;
        }

        let mut piece = self.cell_mut(start).take()?;
        let prev_has_moved = piece.has_moved;
        piece.has_moved = true;
        let captured_piece = self.cell_mut(end).replace(piece);

        Some(UndoState {
            mv: Move { start, end },
            captured_piece,
            prev_has_moved,
        })
    }

    /// Reverts the move recorded in `undo`. Must be called on the board the
    /// record came from, in LIFO order.
    pub fn unmake_move(&mut self, undo: UndoState) {
        let UndoState {
            mv,
            captured_piece,
            prev_has_moved,
        } = undo;

        let moved = std::mem::replace(self.cell_mut(mv.end), captured_piece);
        if let Some(mut piece) = moved {
            piece.has_moved = prev_has_moved;
            *self.cell_mut(mv.start) = Some(piece);
        }
    }
}
