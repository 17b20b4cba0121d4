use crate::game_state::{board::Board, chess_types::Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::rook_moves::is_valid_rook_move;

#[inline]
pub fn is_valid_queen_move(board: &Board, start: Square, end: Square) -> bool {
    is_valid_rook_move(board, start, end) || is_valid_bishop_move(board, start, end)
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_from_d4_reaches_twenty_seven_squares_on_empty_board() {
        let mut board = Board::empty();
        board.place_piece((4, 3), Piece::new(Color::White, PieceKind::Queen));
        let targets = Square::all()
            .filter(|sq| board.is_valid_move((4, 3), *sq))
            .count();
        assert_eq!(targets, 27);
        assert!(!board.is_valid_move((4, 3), (2, 4)));
    }

    #[test]
    fn queen_respects_blockers_on_both_ray_kinds() {
        let mut board = Board::empty();
        board.place_piece((4, 3), Piece::new(Color::White, PieceKind::Queen));
        board.place_piece((2, 3), Piece::new(Color::Black, PieceKind::Pawn));
        board.place_piece((3, 4), Piece::new(Color::White, PieceKind::Pawn));
        assert!(board.is_valid_move((4, 3), (2, 3)));
        assert!(!board.is_valid_move((4, 3), (1, 3)));
        assert!(!board.is_valid_move((4, 3), (3, 4)));
        assert!(!board.is_valid_move((4, 3), (2, 5)));
    }
}
