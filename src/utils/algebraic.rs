//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `(row, file)` squares. File `a..=h` maps to file index `0..=7`; rank `8..=1`
//! maps to row index `0..=7`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, BOARD_SIZE};

/// Convert a square to algebraic notation (for example: row 4, file 4 -> "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'0' + BOARD_SIZE - square.row());
    format!("{file_char}{rank_char}")
}

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(text.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = BOARD_SIZE - (rank - b'0');
    Ok(Square::new(row_index, file_index))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares() {
        assert_eq!(square_to_algebraic(Square::new(0, 0)), "a8");
        assert_eq!(square_to_algebraic(Square::new(7, 7)), "h1");
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
        assert_eq!(algebraic_to_square("a8"), Ok(Square::new(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(Square::new(7, 7)));
    }

    #[test]
    fn king_pawn_squares() {
        assert_eq!(algebraic_to_square("e2"), Ok(Square::new(6, 4)));
        assert_eq!(algebraic_to_square("e4"), Ok(Square::new(4, 4)));
        assert_eq!(square_to_algebraic(Square::new(4, 3)), "d4");
    }

    #[test]
    fn every_square_round_trips() {
        for sq in Square::all() {
            assert_eq!(algebraic_to_square(&square_to_algebraic(sq)), Ok(sq));
        }
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e", "i4", "e9", "e0", "E4", "e44", "4e", "é4"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidNotation(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }
}
