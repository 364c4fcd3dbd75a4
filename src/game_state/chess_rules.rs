//! Canonical rule constants.
//!
//! This module stores the fixed layout and row literals the board model and
//! move generation agree on: the back-rank ordering, each side's home and
//! pawn rows, and the promotion row.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank ordering from file `a` to file `h`.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position in FEN (placement and side to move).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Row holding a side's back-rank pieces at the start.
#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a side's pawns start on; the only row they may double-step from.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes (the opponent's home row).
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    home_row(color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_rows_face_the_opponent() {
        assert_eq!(promotion_row(Color::White), 0);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
