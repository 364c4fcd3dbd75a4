//! Engine abstraction used by the session layer.
//!
//! An engine looks at the current game and proposes a `(from, to)` pair for
//! the side to move. Proposals are pseudo-legal; the session applies them
//! through the same path as human input.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `None` when the side to move has no generated moves.
    fn choose_move(&mut self, game_state: &GameState) -> Option<(Square, Square)>;
}
