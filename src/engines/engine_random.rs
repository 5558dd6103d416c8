//! Random-move engine.
//!
//! Selects uniformly from the legal successors and is primarily used for
//! diagnostics, harness baselines, and opening randomization.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, ThinkParams};
use crate::game_state::game_state::GameState;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "ChameleonChess Random"
    }

    fn author(&self) -> &str {
        "chameleon_chess developers"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &ThinkParams,
    ) -> Result<EngineOutput, String> {
        let successors = game_state.enumerate_successors();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine successors {}",
            successors.len()
        ));

        if successors.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = successors
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random successor")?;

        out.piece_index = Some(picked.piece_index);
        out.destination = Some(picked.destination);
        out.next_state = Some(picked.state.clone());
        Ok(out)
    }
}
