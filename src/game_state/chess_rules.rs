//! Canonical layout constants.
//!
//! Row 0 is black's back rank and row 7 is white's, so the board reads the
//! same way a FEN placement field does.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The four cells scored for center control.
pub const CENTER_SQUARES: [(i8, i8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}
