use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;

/// Forward pushes onto empty squares, a double step from the start row when
/// both squares are empty, and diagonal captures onto opposing pieces.
/// No en passant.
pub fn pawn_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut out = MoveSet::new();
    let forward = color.forward();

    if let Some(one) = origin.offset(forward, 0) {
        if board.is_empty(one) {
            out.insert(one);
            if origin.row() == pawn_start_row(color) {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        out.insert(two);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(target) = origin.offset(forward, d_file) {
            if board.is_enemy(target, color) {
                out.insert(target);
            }
        }
    }

    out
}
