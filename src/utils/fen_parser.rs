//! FEN piece-placement parser for setting up positions.
//!
//! Only the placement field is read; side to move, castling, en passant and
//! clocks have no counterpart on this board and are ignored when present.

use std::error::Error;
use std::fmt;

use crate::game_state::{board::Board, chess_rules::pawn_home_row, chess_types::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    MissingPlacement,
    WrongRankCount(usize),
    InvalidPieceChar(char),
    InvalidEmptyCount(char),
    RankOverflow(usize),
    RankUnderflow(usize),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::MissingPlacement => write!(f, "missing board layout in FEN"),
            BoardParseError::WrongRankCount(n) => {
                write!(f, "board layout must contain 8 ranks, found {n}")
            }
            BoardParseError::InvalidPieceChar(ch) => {
                write!(f, "invalid piece character '{ch}' in board layout")
            }
            BoardParseError::InvalidEmptyCount(ch) => write!(f, "invalid empty-square count '{ch}'"),
            BoardParseError::RankOverflow(row) => write!(f, "row {row} has more than 8 files"),
            BoardParseError::RankUnderflow(row) => write!(f, "row {row} has fewer than 8 files"),
        }
    }
}

impl Error for BoardParseError {}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self, BoardParseError> {
        parse_fen_placement(fen)
    }
}

/// Builds a board from the first field of `fen`. The first FEN rank becomes
/// row 0. Pawns away from their home row are marked as moved.
pub fn parse_fen_placement(fen: &str) -> Result<Board, BoardParseError> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or(BoardParseError::MissingPlacement)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(BoardParseError::WrongRankCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(BoardParseError::InvalidEmptyCount(ch));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(BoardParseError::RankOverflow(row));
                }
                continue;
            }

            let mut piece = piece_from_fen_char(ch).ok_or(BoardParseError::InvalidPieceChar(ch))?;
            if col >= 8 {
                return Err(BoardParseError::RankOverflow(row));
            }
            if piece.kind == PieceKind::Pawn && row as i8 != pawn_home_row(piece.color) {
                piece = piece.moved();
            }
            board.place_piece((row as i8, col as i8), piece);
            col += 1;
        }
        if col != 8 {
            return Err(BoardParseError::RankUnderflow(row));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}
