//! Undo snapshots for applied moves.
//!
//! A `MoveRecord` is everything `undo` needs to put two squares back the
//! way they were; the rest of the board is never touched by a move.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::resolve_promotion;

/// Single undo record pushed by `apply_move` and popped by `undo`.
///
/// Holds the moving piece as it was before the move (so before any
/// promotion) and whatever occupied the destination. Undo replays these two
/// snapshots in reverse and never recomputes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moving_piece_before: Piece,
    pub captured_piece_before: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece_before.is_some()
    }

    /// Kind the moving piece has after the move, taking auto-promotion into
    /// account.
    #[inline]
    pub fn piece_after(&self) -> Piece {
        resolve_promotion(self.moving_piece_before, self.to)
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.piece_after() != self.moving_piece_before
    }
}
