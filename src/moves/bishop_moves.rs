use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;
use crate::moves::move_shared::{add_ray_targets, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(board: &Board, origin: Square, color: Color) -> MoveSet {
    let mut out = MoveSet::new();
    add_ray_targets(board, origin, color, &DIAGONAL_DIRECTIONS, &mut out);
    out
}
