//! Pseudo-legal perft: leaf counts of the move tree by apply/undo.
//!
//! Walks every generated move of the side to move through
//! `GameState::apply_move` and `GameState::undo`, so it also exercises the
//! history snapshots. Kings can be captured like any other piece; there is no
//! game-over detection.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_all_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Leaf-node count at `depth`.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<u64> {
    Ok(perft_counts(game_state, depth)?.nodes)
}

/// Leaf-node count plus how many leaf moves captured or promoted.
///
/// `game_state` is restored before returning.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to) in generate_all_moves(game_state.board(), game_state.turn()) {
        let record = game_state.apply_move(from, to)?;

        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(record.is_capture());
            total.promotions += u64::from(record.is_promotion());
        } else {
            total.merge(perft_counts(game_state, depth - 1)?);
        }

        game_state.undo();
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0).unwrap(), 1);
        assert_eq!(perft(&mut game, 1).unwrap(), 20);
        assert_eq!(perft(&mut game, 2).unwrap(), 400);
        assert_eq!(perft(&mut game, 3).unwrap(), 8902);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn depth_three_capture_count() {
        let mut game = GameState::new_game();
        let counts = perft_counts(&mut game, 3).unwrap();
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.promotions, 0);
    }

    #[test]
    fn promotions_are_counted() {
        let mut game = GameState::from_fen("8/P7/8/8/8/8/8/8 w").unwrap();
        let counts = perft_counts(&mut game, 1).unwrap();
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.promotions, 1);
    }
}
