//! Pseudo-legal destination generation.
//!
//! `generate_moves` is a pure function of a board and an origin square: it
//! dispatches on the piece kind and returns the destinations its movement
//! geometry allows, honoring blockers and captures. It never asks whether the
//! mover's own king would be left attacked.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destination squares. Ordered for deterministic iteration only; callers
/// should treat it as a set.
pub type MoveSet = BTreeSet<Square>;

/// Destinations for the piece on `origin`; empty when `origin` is empty.
pub fn generate_moves(board: &Board, origin: Square) -> MoveSet {
    let Some(piece) = board.get(origin) else {
        return MoveSet::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, origin, piece.color),
        PieceKind::Knight => knight_moves(board, origin, piece.color),
        PieceKind::Bishop => bishop_moves(board, origin, piece.color),
        PieceKind::Rook => rook_moves(board, origin, piece.color),
        PieceKind::Queen => queen_moves(board, origin, piece.color),
        PieceKind::King => king_moves(board, origin, piece.color),
    }
}

/// Every `(from, to)` pair available to `color`, origins in row-major order.
pub fn generate_all_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        out.extend(generate_moves(board, from).into_iter().map(|to| (from, to)));
    }
    out
}

/// Destination source for `PlaySession` highlights, so a front end can
/// swap in a filtered generator.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, origin: Square) -> MoveSet;
}

pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, origin: Square) -> MoveSet {
        generate_moves(board, origin)
    }
}
