//! Crate root module declarations for the Chameleon Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_layout;
    pub mod game_state;
    pub mod game_types;
    pub mod limits;
    pub mod piece_record;
    pub mod role_table;
}

pub mod move_generation {
    pub mod knight_moves;
    pub mod move_generator;
    pub mod slider_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod max_n;
    pub mod parallel;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_max_n;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_game_state;
}
