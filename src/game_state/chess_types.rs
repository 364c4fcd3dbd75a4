//! Value types shared by the board model, move generation and game state.
//!
//! Squares are addressed by `(row, file)` with row 0 / file 0 at `a8`; rows
//! grow downward toward White's side and files grow rightward. Pieces are
//! small `Copy` values, so moving a piece always writes a fresh value at the
//! destination and a piece is never shared between two squares.

use std::fmt;

use crate::utils::algebraic::square_to_algebraic;

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color takes when moving forward.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// An immutable piece value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Same color, different kind. Used for promotion.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Self {
        Self {
            color: self.color,
            kind,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

/// A `(row, file)` coordinate, both in `0..8`.
///
/// The fields are private so every `Square` in circulation is on the board;
/// off-board arithmetic goes through [`Square::offset`], which returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    file: u8,
}

impl Square {
    /// Build a square from on-board coordinates.
    ///
    /// # Panics
    /// Panics when `row` or `file` is 8 or more. Use [`Square::try_new`] for
    /// unchecked input.
    #[inline]
    pub const fn new(row: u8, file: u8) -> Self {
        assert!(row < BOARD_SIZE && file < BOARD_SIZE, "square out of range");
        Self { row, file }
    }

    #[inline]
    pub const fn try_new(row: i8, file: i8) -> Option<Self> {
        if row < 0 || file < 0 || row >= BOARD_SIZE as i8 || file >= BOARD_SIZE as i8 {
            return None;
        }
        Some(Self {
            row: row as u8,
            file: file as u8,
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Square shifted by `(d_row, d_file)`, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_file: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.file as i8 + d_file)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |file| Square { row, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1)));

        let h1 = Square::new(7, 7);
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, 1), None);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
        assert_eq!(squares[8], Square::new(1, 0));
        assert_eq!(squares[63], Square::new(7, 7));
        assert!(squares.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn fen_chars_carry_color() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(white_knight.fen_char(), 'N');
        assert_eq!(Piece::from_fen_char('N'), Some(white_knight));
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn promotion_keeps_color() {
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let queen = pawn.with_kind(PieceKind::Queen);
        assert_eq!(queen.color, Color::Black);
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(pawn.kind, PieceKind::Pawn);
    }
}
