//! Move-list formatting for history display and export.
//!
//! Moves are written in long algebraic coordinates (`e2e4`), with a `q`
//! suffix when a pawn auto-promotes (`e7e8q`). A move log is a small header
//! block followed by numbered move pairs.

use std::fmt::Write;

use chrono::Local;

use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::square_to_algebraic;

pub fn format_move(record: &MoveRecord) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(record.from));
    out.push_str(&square_to_algebraic(record.to));
    if record.is_promotion() {
        out.push(record.piece_after().kind.letter());
    }
    out
}

/// Numbered move pairs: `1. e2e4 e7e5 2. g1f3`.
pub fn move_list_text(history: &[MoveRecord]) -> String {
    let mut out = String::new();
    for (ply, record) in history.iter().enumerate() {
        if ply % 2 == 0 {
            if ply > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}.", ply / 2 + 1);
        }
        out.push(' ');
        out.push_str(&format_move(record));
    }
    out
}

/// Pieces of `color` captured so far, in capture order.
pub fn captured_pieces(history: &[MoveRecord], color: Color) -> Vec<Piece> {
    history
        .iter()
        .filter_map(|record| record.captured_piece_before)
        .filter(|piece| piece.color == color)
        .collect()
}

/// Header block (event, date, result) followed by the move list.
pub fn write_move_log(history: &[MoveRecord], result: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[Event \"Pseudo Chess Game\"]");
    let _ = writeln!(out, "[Date \"{}\"]", Local::now().format("%Y.%m.%d"));
    let _ = writeln!(out, "[Plies \"{}\"]", history.len());
    let _ = writeln!(out, "[Result \"{}\"]", normalize_result(result));
    out.push('\n');
    out.push_str(&move_list_text(history));
    if !history.is_empty() {
        out.push(' ');
    }
    out.push_str(normalize_result(result));
    out.push('\n');
    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}
