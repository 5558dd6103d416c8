//! Engine-versus-engine match harness for local testing.
//!
//! Runs up to four `Engine` implementations against each other without any
//! I/O layer, with an optional seeded random opening prefix so repeated
//! series do not replay one line.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, ThinkParams};
use crate::game_state::game_state::GameState;
use crate::game_state::game_types::{Color, TURN_ORDER};
use crate::utils::algebraic::position_to_algebraic;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub participants: [bool; 4],
    pub max_turns: u32,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub think: ThinkParams,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            participants: [true; 4],
            max_turns: 400,
            opening_min_plies: 0,
            opening_max_plies: 4,
            think: ThinkParams {
                depth: None,
                movetime_ms: Some(100),
            },
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One player owns all remaining material.
    Win(Color),
    /// The active player had pieces but no legal move.
    Stuck(Color),
    /// The turn cap was reached first.
    TurnLimit,
}

#[derive(Debug)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub turns_played: u32,
    pub elapsed_ms: u128,
    pub log: Vec<String>,
}

/// Plays one game. `engines` is indexed by `Color::index()`; seats of
/// non-participants are never consulted.
pub fn run_match(
    engines: &mut [&mut dyn Engine; 4],
    config: &MatchConfig,
) -> Result<MatchReport, String> {
    let started = Instant::now();
    let mut state = GameState::begin_game(config.participants).map_err(|e| e.to_string())?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let opening_plies = if config.opening_max_plies > config.opening_min_plies {
        rng.random_range(config.opening_min_plies..=config.opening_max_plies)
    } else {
        config.opening_min_plies
    };

    let mut log = Vec::new();
    let mut turns_played = 0u32;
    let outcome = loop {
        if state.is_game_over() {
            break MatchOutcome::Win(winner_of(&state));
        }
        if turns_played >= config.max_turns {
            break MatchOutcome::TurnLimit;
        }

        let mover = state.turn;
        let (piece_index, destination) = if turns_played < u32::from(opening_plies) {
            let successors = state.enumerate_successors();
            let Some(picked) = successors.as_slice().choose(&mut rng) else {
                break MatchOutcome::Stuck(mover);
            };
            (picked.piece_index, picked.destination)
        } else {
            let engine = &mut engines[mover.index()];
            let out = engine.choose_move(&state, &config.think)?;
            let (Some(piece_index), Some(destination)) = (out.piece_index, out.destination)
            else {
                break MatchOutcome::Stuck(mover);
            };
            (piece_index, destination)
        };

        let from = position_to_algebraic(state.pieces[piece_index].position)?;
        let to = position_to_algebraic(destination)?;
        log.push(format!(
            "turn {} {} {}{}",
            turns_played + 1,
            mover.letter(),
            from,
            to
        ));

        state = state
            .check_and_apply_move(piece_index, destination)
            .map_err(|e| format!("engine produced an illegal move: {e}"))?;
        turns_played += 1;
    };

    Ok(MatchReport {
        outcome,
        turns_played,
        elapsed_ms: started.elapsed().as_millis(),
        log,
    })
}

fn winner_of(state: &GameState) -> Color {
    let alive = state.players_alive();
    TURN_ORDER
        .into_iter()
        .find(|c| alive[c.index()])
        // A game with zero living pieces cannot arise from legal play; the
        // deadlock rule never removes the winner's last piece.
        .unwrap_or(Color::Red)
}
