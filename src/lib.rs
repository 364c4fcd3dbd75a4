//! Crate root module declarations for the pseudo-legal chess core.
//!
//! This file exposes the board model, per-piece move generation, the game
//! state manager with its undo history, and the text utilities and session
//! layer that a presentation front end drives. Binaries, tests, and benches
//! import these stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod play_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_list;
    pub mod render_game_state;
}
