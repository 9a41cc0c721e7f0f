//! Crate root module declarations for the Casual Chess project.
//!
//! Exposes the board model, move generation, search, engine, session and
//! utility layers so the terminal binary, tests and benches share one set of
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod tables {
    pub mod opening_book;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_log;
    pub mod game_session;
    pub mod terminal_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod render_game_state;
    pub mod state_codec;
}
