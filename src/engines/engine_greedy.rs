//! One-ply greedy engine.
//!
//! Scores every successor with the static evaluation and takes the best,
//! breaking ties uniformly at random. Stronger than random, much weaker
//! than the maxⁿ engine; its main job is being a harness opponent.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, ThinkParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::score;

pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "ChameleonChess Greedy"
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
            "info string greedy_engine successors {}",
            successors.len()
        ));

        if successors.is_empty() {
            return Ok(out);
        }

        let mover = game_state.turn.index();
        let mut best_share = f32::MIN;
        let mut best = Vec::new();
        for (i, successor) in successors.iter().enumerate() {
            let share = score(&successor.state)[mover];
            if share > best_share {
                best_share = share;
                best.clear();
                best.push(i);
            } else if share == best_share {
                best.push(i);
            }
        }

        let mut rng = rand::rng();
        let &picked = best
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose among best successors")?;

        out.info_lines
            .push(format!("info string greedy_engine share {:.4}", best_share));
        out.piece_index = Some(successors[picked].piece_index);
        out.destination = Some(successors[picked].destination);
        out.next_state = Some(successors[picked].state.clone());
        Ok(out)
    }
}
