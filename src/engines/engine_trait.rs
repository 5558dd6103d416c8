//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped behind a single trait interface by
//! harnesses, the demo binary, and tests.

use crate::game_state::game_state::GameState;
use crate::game_state::game_types::Position;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThinkParams {
    /// Fixed search depth override, where the engine supports one.
    pub depth: Option<u8>,
    /// Wall-clock think budget in milliseconds.
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Index of the moved piece in the input state, if a move was found.
    pub piece_index: Option<usize>,
    /// Destination of the chosen move.
    pub destination: Option<Position>,
    /// The state after the chosen move.
    pub next_state: Option<GameState>,
    /// Diagnostic lines for logs and harness output.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;
    fn author(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &ThinkParams,
    ) -> Result<EngineOutput, String>;
}
