use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;
use crate::moves::move_shared::add_step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step in any direction. No castling.
pub fn king_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut out = MoveSet::new();
    add_step_targets(board, origin, color, &KING_OFFSETS, &mut out);
    out
}
