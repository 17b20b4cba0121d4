//! Crate root module declarations for the Slate chess core.
//!
//! Exposes the board model and its per-piece pseudo-legality rules, move
//! enumeration with reversible application, the fixed-depth alpha-beta
//! search, the engine layer built on it, and small utilities for setting up,
//! printing, and playing out positions.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod fen_parser;
    pub mod render_board;
}
