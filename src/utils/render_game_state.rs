//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the text front end, tests and
//! diagnostics. Row 0 (rank 8) is printed first. Highlighted destinations
//! are drawn as `*` on empty squares and bracketed when they hold a piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveSet;

/// Render the board, marking `highlights`. `unicode` selects chess glyphs
/// over FEN letters.
pub fn render_board(board: &Board, highlights: &MoveSet, unicode: bool) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + BOARD_SIZE - row);
        out.push(rank);
        out.push(' ');

        for file in 0..BOARD_SIZE {
            let sq = Square::new(row, file);
            let marked = highlights.contains(&sq);
            let glyph = match board.get(sq) {
                Some(piece) if unicode => piece_to_unicode(piece),
                Some(piece) => piece.fen_char(),
                None if marked => '*',
                None => '·',
            };

            if marked && board.get(sq).is_some() {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
