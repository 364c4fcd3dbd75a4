//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type returned by notation parsing, board
//! setup, session configuration and the strict move path. Most core
//! operations cannot fail at all: move generation is total, `apply_move`
//! only rejects an empty origin, and `undo` on an empty history is a silent
//! no-op. The failing counterparts (`try_undo`, `apply_checked_move`) exist
//! for callers that want the condition surfaced.
//!
//! Usage guidelines:
//! - Treat `InvalidNotation`, `InvalidFen` and `InvalidOption` as input
//!   errors suitable for showing to an end user.
//! - Treat `IllegalMove` and `EmptyOrigin` as rejected moves; the game state
//!   is left untouched when they are returned.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Result alias used by every fallible operation in the crate.
pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// An algebraic square string was not a file `a..=h` followed by a rank
    /// `1..=8`.
    ///
    /// Payload: the original text.
    #[error("invalid algebraic notation: {0:?}")]
    InvalidNotation(String),

    /// `try_undo` was called with no moves recorded.
    #[error("no moves to undo")]
    EmptyHistoryUndo,

    /// A move was requested from a square that holds no piece.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// The strict move path refused a move that the generator does not
    /// produce or that belongs to the side not on turn.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: String,
    },

    /// Board setup text could not be parsed.
    ///
    /// Payload: a description of the first problem found.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A session option name was unknown or its value did not parse.
    #[error("invalid option {name}={value:?}")]
    InvalidOption { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn messages_use_algebraic_squares() {
        let err = ChessError::IllegalMove {
            from: Square::new(6, 4),
            to: Square::new(3, 4),
            reason: "not generated".to_owned(),
        };
        assert_eq!(err.to_string(), "illegal move e2e5: not generated");
        assert_eq!(
            ChessError::EmptyOrigin(Square::new(4, 4)).to_string(),
            "no piece on origin square e4"
        );
    }
}
