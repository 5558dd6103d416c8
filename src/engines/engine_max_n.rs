//! The full-strength engine: time-boxed parallel maxⁿ search.

use crate::engines::engine_trait::{Engine, EngineOutput, ThinkParams};
use crate::errors::Errors;
use crate::game_state::game_state::GameState;
use crate::search::parallel::choose_successor;
use std::time::Duration;

/// Default think budget when the caller supplies none.
pub const DEFAULT_MOVETIME_MS: u64 = 1_000;

pub struct MaxNEngine {
    default_movetime_ms: u64,
}

impl MaxNEngine {
    pub fn new() -> Self {
        Self {
            default_movetime_ms: DEFAULT_MOVETIME_MS,
        }
    }

    pub fn with_movetime_ms(default_movetime_ms: u64) -> Self {
        Self {
            default_movetime_ms,
        }
    }

    #[inline]
    fn budget(&self, params: &ThinkParams) -> Duration {
        Duration::from_millis(params.movetime_ms.unwrap_or(self.default_movetime_ms))
    }
}

impl Default for MaxNEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MaxNEngine {
    fn name(&self) -> &str {
        "ChameleonChess MaxN"
    }

    fn author(&self) -> &str {
        "chameleon_chess developers"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &ThinkParams,
    ) -> Result<EngineOutput, String> {
        let budget = self.budget(params);
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string max_n_engine movetime_ms {}",
            budget.as_millis()
        ));

        match choose_successor(game_state, budget) {
            Ok(successor) => {
                out.piece_index = Some(successor.piece_index);
                out.destination = Some(successor.destination);
                out.next_state = Some(successor.state);
                Ok(out)
            }
            // A stuck-but-unfinished position has no move to offer; that is
            // a normal (empty) engine answer, not a failure.
            Err(Errors::NoLegalMoves) => Ok(out),
            Err(e) => Err(e.to_string()),
        }
    }
}
