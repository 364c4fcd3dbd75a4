use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;
use crate::moves::move_shared::{add_ray_targets, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn queen_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut out = MoveSet::new();
    add_ray_targets(board, origin, color, &ORTHOGONAL_DIRECTIONS, &mut out);
    add_ray_targets(board, origin, color, &DIAGONAL_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::{bishop_moves::bishop_moves, rook_moves::rook_moves};

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        board.set(Square::new(1, 1), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(Square::new(4, 6), Some(Piece::new(Color::White, PieceKind::Pawn)));
        let d4 = Square::new(4, 3);

        let mut expected = rook_moves(&board, d4, Color::White);
        expected.extend(bishop_moves(&board, d4, Color::White));
        assert_eq!(queen_moves(&board, d4, Color::White), expected);
    }

    #[test]
    fn queen_from_d4_on_empty_board() {
        assert_eq!(
            queen_moves(&Board::empty(), Square::new(4, 3), Color::White).len(),
            27
        );
    }
}
