//! Authoritative game session state.
//!
//! `GameState` exclusively owns the board, the side to move and the move
//! history for one game. It applies moves mechanically: legality is the
//! caller's job (via `generate_moves`), and any `(from, to)` pair with a
//! piece on `from` is carried out and recorded. Every applied move pushes a
//! `MoveRecord` snapshot and flips the turn; `undo` pops the snapshot and
//! reverses it exactly, flipping the turn back.
//!
//! A stricter entry point, `apply_checked_move`, refuses moves that are not
//! generated for the side on turn. It is opt-in and never used implicitly.

use log::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::move_generator::{generate_moves, MoveSet};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Piece value that lands on `to`: a pawn reaching its promotion row becomes
/// a queen, everything else is unchanged.
#[inline]
pub fn resolve_promotion(piece: Piece, to: Square) -> Piece {
    if piece.kind == PieceKind::Pawn && to.row() == promotion_row(piece.color) {
        piece.with_kind(PieceKind::Queen)
    } else {
        piece
    }
}

impl GameState {
    /// Starting layout, White to move, empty history.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Arbitrary layout with an empty history.
    #[inline]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current board, for callers that keep it across moves.
    #[inline]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Destinations for the piece on `origin` in the current position.
    #[inline]
    pub fn moves_from(&self, origin: Square) -> MoveSet {
        generate_moves(&self.board, origin)
    }

    /// Move the piece on `from` to `to`, overwriting whatever is there.
    ///
    /// A pawn landing on its promotion row becomes a queen. Returns the
    /// record pushed onto the history. The only failure is an empty origin,
    /// which leaves the state untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        let Some(moving_piece) = self.board.get(from) else {
            warn!("apply_move from empty square {from}");
            return Err(ChessError::EmptyOrigin(from));
        };

        let mut next = self.board.clone();
        next.take(from);
        let captured = next.set(to, Some(resolve_promotion(moving_piece, to)));

        let record = MoveRecord {
            from,
            to,
            moving_piece_before: moving_piece,
            captured_piece_before: captured,
        };
        debug!(
            "{} plays {from}{to}{}{}",
            self.turn,
            if record.is_capture() { " capture" } else { "" },
            if record.is_promotion() { " promote" } else { "" },
        );

        self.board = next;
        self.history.push(record);
        self.turn = self.turn.opposite();
        Ok(record)
    }

    /// Like [`GameState::apply_move`], but only accepts moves of the side on
    /// turn whose destination is among the generated moves.
    pub fn apply_checked_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        let piece = self.board.get(from).ok_or(ChessError::EmptyOrigin(from))?;

        let illegal = |reason: String| {
            warn!("rejected {from}{to}: {reason}");
            ChessError::IllegalMove { from, to, reason }
        };

        if piece.color != self.turn {
            return Err(illegal(format!("{} is not on turn", piece.color)));
        }
        if !self.moves_from(from).contains(&to) {
            return Err(illegal(format!("{:?} cannot reach {to}", piece.kind)));
        }

        self.apply_move(from, to)
    }

    /// Reverse the last applied move. Does nothing when the history is empty.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            warn!("undo with empty history ignored");
            return None;
        };

        // Restore `to` first so a degenerate `from == to` record ends with
        // the moving piece back on its square.
        self.board.set(record.to, record.captured_piece_before);
        self.board.set(record.from, Some(record.moving_piece_before));
        self.turn = self.turn.opposite();

        debug!("undo {}{}", record.from, record.to);
        Some(record)
    }

    /// Like [`GameState::undo`], but reports an empty history as an error.
    pub fn try_undo(&mut self) -> ChessResult<MoveRecord> {
        self.undo().ok_or(ChessError::EmptyHistoryUndo)
    }

    /// Back to the starting layout with White to move and no history.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.turn = Color::White;
        self.history.clear();
        debug!("game reset");
    }
}
