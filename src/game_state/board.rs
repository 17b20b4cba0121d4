//! The 8x8 board: piece storage, pseudo-legality checks, and move application.
//!
//! Legality is answered by pure queries (`get_piece`, `is_valid_move`) that
//! never touch state. `make_move` and its undo-aware sibling in
//! `move_generation::legal_move_apply` are the only mutators.

use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::*;
use crate::moves::{
    bishop_moves::is_valid_bishop_move, king_moves::is_valid_king_move,
    knight_moves::is_valid_knight_move, pawn_moves::is_valid_pawn_move,
    queen_moves::is_valid_queen_move, rook_moves::is_valid_rook_move,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let pawn_row = pawn_home_row(color) as usize;
            let back_row = back_rank_row(color) as usize;
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.cells[pawn_row][col] = Some(Piece::new(color, PieceKind::Pawn));
                board.cells[back_row][col] = Some(Piece::new(color, *kind));
            }
        }
        board
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Piece on `(row, col)`, or `None` for an empty or off-board cell.
    #[inline]
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        self.piece_at(Square::new(row, col))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize]
    }

    /// Puts `piece` on `square`, returning whatever was there. Off-board
    /// squares are ignored.
    pub fn place_piece(&mut self, square: impl Into<Square>, piece: Piece) -> Option<Piece> {
        let square = square.into();
        if !square.is_on_board() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize].replace(piece)
    }

    pub fn remove_piece(&mut self, square: impl Into<Square>) -> Option<Piece> {
        let square = square.into();
        if !square.is_on_board() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Pseudo-legality check. Does not consider king safety.
    pub fn is_valid_move(&self, start: impl Into<Square>, end: impl Into<Square>) -> bool {
        let (start, end) = (start.into(), end.into());

        let Some(piece) = self.piece_at(start) else {
            return false;
        };
        if !end.is_on_board() {
            return false;
        }
        if let Some(target) = self.piece_at(end) {
            if target.color == piece.color {
                return false;
            }
        }

        match piece.kind {
            PieceKind::Pawn => is_valid_pawn_move(self, piece, start, end),
            PieceKind::Knight => is_valid_knight_move(start, end),
            PieceKind::Bishop => is_valid_bishop_move(self, start, end),
            PieceKind::Rook => is_valid_rook_move(self, start, end),
            PieceKind::Queen => is_valid_queen_move(self, start, end),
            PieceKind::King => is_valid_king_move(start, end),
        }
    }

    /// Applies the move if it is pseudo-legal. A captured piece is simply
    /// overwritten. Returns `false` without touching the board otherwise.
    pub fn make_move(&mut self, start: impl Into<Square>, end: impl Into<Square>) -> bool {
        self.make_move_with_undo(start, end).is_some()
    }

    pub(crate) fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.row as usize][square.col as usize]
    }
}
