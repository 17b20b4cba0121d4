//! Pluggable board evaluation interfaces and the baseline implementation.
//!
//! Search stays agnostic of the heuristic by delegating static scoring to
//! `BoardScorer`. Scores are absolute: positive favors white, negative favors
//! black, regardless of which side is searching.

use crate::game_state::{board::Board, chess_rules::CENTER_SQUARES, chess_types::*};

pub type Score = i32;

/// Sentinel bounds of the search window and of a ply with no moves.
pub const NEG_INFINITY: Score = Score::MIN;
pub const POS_INFINITY: Score = Score::MAX;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> Score;
}

/// Static value of each piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 20000,
        }
    }
}

impl PieceValues {
    #[inline]
    pub const fn value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Material balance plus a flat bonus for each piece standing on one of the
/// four center cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCenterScorer {
    pub piece_values: PieceValues,
    pub center_control_bonus: Score,
}

impl Default for MaterialCenterScorer {
    fn default() -> Self {
        Self {
            piece_values: PieceValues::default(),
            center_control_bonus: 10,
        }
    }
}

impl MaterialCenterScorer {
    pub fn new(piece_values: PieceValues, center_control_bonus: Score) -> Self {
        Self {
            piece_values,
            center_control_bonus,
        }
    }

    #[inline]
    fn signed(color: Color, value: Score) -> Score {
        match color {
            Color::White => value,
            Color::Black => -value,
        }
    }

    pub fn material(&self, board: &Board) -> Score {
        board
            .pieces()
            .map(|(_, piece)| Self::signed(piece.color, self.piece_values.value(piece.kind)))
            .sum()
    }

    pub fn center_control(&self, board: &Board) -> Score {
        CENTER_SQUARES
            .iter()
            .filter_map(|&(row, col)| board.get_piece(row, col))
            .map(|piece| Self::signed(piece.color, self.center_control_bonus))
            .sum()
    }
}

impl BoardScorer for MaterialCenterScorer {
    fn score(&self, board: &Board) -> Score {
        self.material(board) + self.center_control(board)
    }
}
