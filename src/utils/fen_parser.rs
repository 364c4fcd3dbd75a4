//! FEN-to-GameState parser.
//!
//! Reads the piece-placement field and an optional side-to-move field. The
//! remaining FEN fields (castling, en passant, clocks) describe rules this
//! engine does not model; they are accepted and ignored so standard FEN
//! strings paste in unchanged.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let board = parse_placement(board_part)?;
    let turn = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    Ok(GameState::from_board(board, turn))
}

/// Parse only the piece-placement field (`rnbqkbnr/pppppppp/8/...`).
///
/// The first rank field is row 0.
pub fn parse_placement(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > BOARD_SIZE {
                    return Err(too_many_files(row));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            if file >= BOARD_SIZE {
                return Err(too_many_files(row));
            }

            board.set(Square::new(row as u8, file), Some(piece));
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                BOARD_SIZE as usize - row
            )));
        }
    }

    Ok(board)
}

fn too_many_files(row: usize) -> ChessError {
    ChessError::InvalidFen(format!(
        "rank {} has too many files",
        BOARD_SIZE as usize - row
    ))
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_fen_matches_starting_board() {
        let game = parse_fen(STARTING_POSITION_FEN).unwrap();
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn full_standard_fen_is_accepted() {
        let game =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(
            game.board().get(Square::new(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(game.board().is_empty(Square::new(6, 4)));
    }

    #[test]
    fn side_defaults_to_white() {
        let game = parse_fen("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board(), &Board::empty());
    }

    #[test]
    fn rejects_malformed_layouts() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "0/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "44p/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 x",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
