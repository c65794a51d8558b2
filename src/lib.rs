//! Crate root module declarations for the hexagonal chess engine.
//!
//! This file exposes the board model, per-piece move geometry, legal move
//! generation, the intent reducer, and diagnostic utilities so binaries,
//! benches, and embedding front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod config;
    pub mod coordinates;
    pub mod game_state;
    pub mod turn_cycle;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod hex_rays;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod reducer {
    pub mod game_reducer;
    pub mod intents;
}

pub mod utils {
    pub mod playout_harness;
    pub mod render_game_state;
}
