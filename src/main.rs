//! Self-play demo binary.
//!
//! Starts a four-player game and lets the maxⁿ engine play every seat
//! until the game ends, printing each position with a timestamped move
//! line. Useful for eyeballing engine behavior without any UI.

use chameleon_chess::engines::engine_max_n::MaxNEngine;
use chameleon_chess::engines::engine_trait::{Engine, ThinkParams};
use chameleon_chess::game_state::game_state::GameState;
use chameleon_chess::utils::algebraic::position_to_algebraic;
use chameleon_chess::utils::render_game_state::render_game_state;

const THINK_MS: u64 = 500;
const MAX_TURNS: u32 = 300;

fn main() {
    let mut state = match GameState::begin_game([true; 4]) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("failed to start game: {e}");
            return;
        }
    };

    let mut engine = MaxNEngine::with_movetime_ms(THINK_MS);
    let params = ThinkParams {
        depth: None,
        movetime_ms: Some(THINK_MS),
    };

    println!("{}\n", render_game_state(&state));

    for turn in 1..=MAX_TURNS {
        if state.is_game_over() {
            break;
        }

        let mover = state.turn;
        let out = match engine.choose_move(&state, &params) {
            Ok(out) => out,
            Err(e) => {
                eprintln!("engine failed on turn {turn}: {e}");
                return;
            }
        };

        let (Some(piece_index), Some(destination), Some(next_state)) =
            (out.piece_index, out.destination, out.next_state)
        else {
            println!("player {} has no legal move; stopping", mover.letter());
            break;
        };

        let from = position_to_algebraic(state.pieces[piece_index].position)
            .unwrap_or_else(|_| "??".to_string());
        let to = position_to_algebraic(destination).unwrap_or_else(|_| "??".to_string());
        println!(
            "[{}] turn {} {} {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            turn,
            mover.letter(),
            from,
            to
        );

        state = next_state;
        println!("{}\n", render_game_state(&state));
    }

    let alive = state.players_alive();
    if state.is_game_over() {
        let winner = ['R', 'G', 'Y', 'B']
            .iter()
            .zip(alive.iter())
            .find(|(_, &a)| a)
            .map(|(l, _)| *l)
            .unwrap_or('?');
        println!("game over, winner {winner}");
    } else {
        println!("turn cap reached without a winner");
    }
}
