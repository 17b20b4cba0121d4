//! Pseudo-legal move enumeration.
//!
//! Enumeration is brute force over the board: every own piece is tried
//! against every destination with `Board::is_valid_move`. The order is
//! row-major over sources, then row-major over destinations, so a fixed board
//! always yields the same sequence.

use crate::game_state::{board::Board, chess_types::*};

pub fn enumerate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    enumerate_moves_into(board, color, &mut out);
    out
}

/// Appends to `out` instead of allocating.
pub fn enumerate_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    for (start, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for end in Square::all() {
            if board.is_valid_move(start, end) {
                out.push(Move { start, end });
            }
        }
    }
}

/// Every square the piece on `start` may move to.
pub fn legal_destinations(board: &Board, start: impl Into<Square>) -> Vec<Square> {
    let start = start.into();
    if board.piece_at(start).is_none() {
        return Vec::new();
    }
    Square::all()
        .filter(|end| board.is_valid_move(start, *end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_moves_per_side_from_start() {
        let board = Board::new();
        assert_eq!(enumerate_moves(&board, Color::White).len(), 20);
        assert_eq!(enumerate_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn enumeration_order_is_row_major() {
        let board = Board::new();
        let moves = enumerate_moves(&board, Color::Black);
        // b8 knight comes first: a6 before c6.
        assert_eq!(moves[0], Move::new((0, 1), (2, 0)));
        assert_eq!(moves[1], Move::new((0, 1), (2, 2)));
        assert_eq!(moves[4], Move::new((1, 0), (2, 0)));
        assert_eq!(moves[5], Move::new((1, 0), (3, 0)));

        let keys: Vec<_> = moves
            .iter()
            .map(|m| (m.start.row, m.start.col, m.end.row, m.end.col))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn enumeration_is_reproducible() {
        let mut board = Board::new();
        assert!(board.make_move((6, 4), (4, 4)));
        assert_eq!(
            enumerate_moves(&board, Color::White),
            enumerate_moves(&board, Color::White)
        );
    }

    #[test]
    fn every_enumerated_move_is_valid_and_owned() {
        let mut board = Board::new();
        assert!(board.make_move((6, 3), (4, 3)));
        assert!(board.make_move((1, 4), (3, 4)));
        for color in [Color::White, Color::Black] {
            for mv in enumerate_moves(&board, color) {
                assert!(board.is_valid_move(mv.start, mv.end));
                assert_eq!(board.piece_at(mv.start).map(|p| p.color), Some(color));
            }
        }
    }

    #[test]
    fn destinations_for_selected_piece() {
        let board = Board::new();
        assert_eq!(
            legal_destinations(&board, (7, 6)),
            vec![Square::new(5, 5), Square::new(5, 7)]
        );
        assert_eq!(
            legal_destinations(&board, (6, 0)),
            vec![Square::new(4, 0), Square::new(5, 0)]
        );
        assert!(legal_destinations(&board, (4, 4)).is_empty());
        assert!(legal_destinations(&board, (7, 0)).is_empty());
    }

    #[test]
    fn side_without_pieces_has_no_moves() {
        let mut board = Board::empty();
        board.place_piece((0, 0), Piece::new(Color::Black, PieceKind::King));
        assert!(enumerate_moves(&board, Color::White).is_empty());
        assert_eq!(enumerate_moves(&board, Color::Black).len(), 3);
    }
}
