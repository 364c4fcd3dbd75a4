//! Fixed 8x8 mailbox board.
//!
//! `Board` is a plain value: an 8x8 array of optional pieces with at most
//! one piece per square. It never resizes and enforces no piece-count rules.
//! Cloning is a full value copy, so a caller holding an earlier board is
//! never affected by moves applied later.

use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with every square empty.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard opening layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = home_row(color);
            let pawns = pawn_start_row(color);
            for (file, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let file = file as u8;
                board.set(Square::new(back, file), Some(Piece::new(color, *kind)));
                board.set(
                    Square::new(pawns, file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.file() as usize]
    }

    /// Overwrite a square, returning what was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row() as usize][square.file() as usize],
            piece,
        )
    }

    /// Remove and return the piece on a square.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True when `square` holds a piece of the color opposing `color`.
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(p) if p.color != color)
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn is_own(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(p) if p.color == color)
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}
