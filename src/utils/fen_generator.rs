//! GameState-to-FEN serializer.
//!
//! Emits the piece-placement field followed by the side to move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let side = match game_state.turn() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {side}", generate_placement(game_state.board()))
}

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..BOARD_SIZE {
        let mut empty = 0u8;
        for file in 0..BOARD_SIZE {
            match board.get(Square::new(row, file)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_follows_moves() {
        let mut game = GameState::new_game();
        game.apply_move(Square::new(6, 4), Square::new(4, 4)).unwrap();
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
    }

    #[test]
    fn parse_then_generate_is_stable() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b";
        assert_eq!(parse_fen(fen).unwrap().get_fen(), fen);
    }
}
