use crate::game_state::{board::Board, chess_types::Square};
use crate::moves::sliding::path_is_clear;

pub fn is_valid_bishop_move(board: &Board, start: Square, end: Square) -> bool {
    let d_row = (end.row - start.row).abs();
    let d_col = (end.col - start.col).abs();
    d_row == d_col && path_is_clear(board, start, end)
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_slides_diagonally_until_blocked() {
        let mut board = Board::empty();
        board.place_piece((4, 4), Piece::new(Color::White, PieceKind::Bishop));
        assert!(board.is_valid_move((4, 4), (0, 0)));
        assert!(board.is_valid_move((4, 4), (7, 1)));
        assert!(!board.is_valid_move((4, 4), (4, 0)));
        assert!(!board.is_valid_move((4, 4), (2, 3)));

        board.place_piece((2, 2), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(board.is_valid_move((4, 4), (2, 2)));
        assert!(!board.is_valid_move((4, 4), (1, 1)));
    }

    #[test]
    fn bishop_is_boxed_in_at_the_start() {
        let board = Board::new();
        for end in Square::all() {
            assert!(!board.is_valid_move((7, 2), end));
        }
    }
}
