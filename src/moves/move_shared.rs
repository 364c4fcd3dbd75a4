//! Step and ray walkers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Add every on-board `origin + offset` not holding a piece of `color`.
pub fn add_step_targets(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut MoveSet,
) {
    for &(d_row, d_file) in offsets {
        if let Some(target) = origin.offset(d_row, d_file) {
            if !board.is_own(target, color) {
                out.insert(target);
            }
        }
    }
}

/// Walk from `origin` along each direction, adding empty squares, stopping
/// before an own piece and after an opposing one.
pub fn add_ray_targets(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut MoveSet,
) {
    for &(d_row, d_file) in directions {
        let mut cursor = origin.offset(d_row, d_file);
        while let Some(target) = cursor {
            match board.get(target) {
                None => {
                    out.insert(target);
                }
                Some(piece) => {
                    if piece.color != color {
                        out.insert(target);
                    }
                    break;
                }
            }
            cursor = target.offset(d_row, d_file);
        }
    }
}
