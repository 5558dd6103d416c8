//! Time-boxed parallel move selection.
//!
//! The coordinator computes depth-0 static scores up front as a guaranteed
//! fallback, splits the top-level successors into order-preserving,
//! size-balanced groups, and hands each group to a worker thread. Workers
//! iteratively deepen over their group and report every improving score
//! through a one-directional channel. When the budget elapses the
//! coordinator flips the shared stop flag, picks the best successor seen
//! so far, and returns without waiting for the workers to drain.
//!
//! Workers never share game state: each receives owned copies, so no
//! locking discipline exists anywhere in the search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::Errors;
use crate::game_state::game_state::{GameState, Successor};
use crate::search::board_scoring::{score, Score};
use crate::search::max_n::{depth_for_piece_count, search_value, NO_PRUNING_BOUND};

/// Hard ceiling on top of the think budget; exceeding it is a loud
/// `SearchTimeout` instead of an indefinite hang.
pub const HARD_CEILING_FACTOR: u32 = 4;
pub const HARD_CEILING_SLACK: Duration = Duration::from_millis(250);

/// One improving result from a worker. Workers report eagerly after every
/// finished successor so the coordinator always holds a recent best.
#[derive(Debug, Clone, Copy)]
struct ScoreReport {
    successor_index: usize,
    share: Score,
    depth: u8,
}

#[inline]
fn hard_ceiling(budget: Duration) -> Duration {
    budget * HARD_CEILING_FACTOR + HARD_CEILING_SLACK
}

/// Splits `0..len` into at most `groups` contiguous, size-balanced runs.
fn partition_indices(len: usize, groups: usize) -> Vec<Vec<usize>> {
    let groups = groups.max(1).min(len.max(1));
    let base = len / groups;
    let remainder = len % groups;
    let mut out = Vec::with_capacity(groups);
    let mut next = 0;
    for g in 0..groups {
        let size = base + usize::from(g < remainder);
        out.push((next..next + size).collect());
        next += size;
    }
    out.retain(|group: &Vec<usize>| !group.is_empty());
    out
}

/// Picks the strongest successor for the player to move, spending at most
/// `budget` of wall-clock time plus coordination slack.
pub fn choose_successor(state: &GameState, budget: Duration) -> Result<Successor, Errors> {
    if state.is_game_over() {
        return Err(Errors::GameAlreadyOver);
    }

    let started = Instant::now();
    let mut successors = state.enumerate_successors();
    if successors.is_empty() {
        return Err(Errors::NoLegalMoves);
    }

    let mover = state.turn.index();

    // Depth-0 baseline: even if no worker ever reports, a move is ready.
    let mut best_share: Vec<Score> = successors
        .iter()
        .map(|s| score(&s.state)[mover])
        .collect();
    let mut best_depth: Vec<u8> = vec![0; successors.len()];

    if successors.len() > 1 && !budget.is_zero() {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel::<ScoreReport>();
        let depth_ceiling = depth_for_piece_count(state.pieces.len()).saturating_add(2);

        for group in partition_indices(successors.len(), worker_count(successors.len())) {
            let work: Vec<(usize, GameState)> = group
                .iter()
                .map(|&i| (i, successors[i].state.clone()))
                .collect();
            let tx = tx.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut rng = rand::rng();
                let mut nodes = 0u64;
                for depth in 1..=depth_ceiling {
                    for (successor_index, successor_state) in &work {
                        if stop.load(Ordering::Relaxed) {
                            return;
                        }
                        let value =
                            search_value(successor_state, depth, NO_PRUNING_BOUND, &mut rng, &mut nodes);
                        let report = ScoreReport {
                            successor_index: *successor_index,
                            share: value[mover],
                            depth,
                        };
                        if tx.send(report).is_err() {
                            return;
                        }
                    }
                }
            });
        }
        drop(tx);

        let deadline = started + budget;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match rx.recv_timeout(deadline - now) {
                Ok(report) => {
                    let i = report.successor_index;
                    let deeper = report.depth > best_depth[i];
                    let better_at_depth =
                        report.depth == best_depth[i] && report.share > best_share[i];
                    if deeper || better_at_depth {
                        best_depth[i] = report.depth;
                        best_share[i] = report.share;
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        // Coarse cancellation: flag the workers and walk away.
        stop.store(true, Ordering::Relaxed);
    }

    if started.elapsed() > hard_ceiling(budget) {
        return Err(Errors::SearchTimeout);
    }

    let mut best_index = 0;
    for (i, &share) in best_share.iter().enumerate() {
        if share > best_share[best_index] {
            best_index = i;
        }
    }
    Ok(successors.swap_remove(best_index))
}

/// Time-boxed computer move: the strongest reachable follow-up state.
pub fn compute_computer_move(state: &GameState, budget: Duration) -> Result<GameState, Errors> {
    choose_successor(state, budget).map(|s| s.state)
}

fn worker_count(successor_count: usize) -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(successor_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_types::{position_in, Color, Position};
    use crate::game_state::limits::FULL_BOARD_LIMITS;
    use crate::game_state::piece_record::Piece;

    #[test]
    fn partitioning_is_order_preserving_and_balanced() {
        let groups = partition_indices(10, 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], vec![0, 1, 2, 3]);
        assert_eq!(groups[1], vec![4, 5, 6]);
        assert_eq!(groups[2], vec![7, 8, 9]);

        let tiny = partition_indices(2, 8);
        assert_eq!(tiny.len(), 2);

        let empty = partition_indices(0, 4);
        assert!(empty.is_empty());
    }

    #[test]
    fn finished_game_is_rejected() {
        let state = GameState {
            limits: FULL_BOARD_LIMITS,
            pieces: vec![Piece::new(Color::Red, Position::new(4, 4), Color::Green)],
            turn: Color::Red,
        };
        assert_eq!(
            compute_computer_move(&state, Duration::from_millis(10)),
            Err(Errors::GameAlreadyOver)
        );
    }

    #[test]
    fn zero_budget_still_returns_the_baseline_move() {
        let state = GameState::begin_game([true; 4]).expect("game should start");
        let chosen = choose_successor(&state, Duration::ZERO).expect("baseline move expected");
        assert!(position_in(
            &state.moves_of(chosen.piece_index),
            chosen.destination
        ));
    }

    #[test]
    fn chosen_move_is_legal_and_respects_the_budget() {
        let state = GameState::begin_game([true; 4]).expect("game should start");
        let budget = Duration::from_millis(150);
        let started = Instant::now();
        let chosen = choose_successor(&state, budget).expect("search should produce a move");
        assert!(started.elapsed() < hard_ceiling(budget));

        assert_eq!(state.pieces[chosen.piece_index].owner, Color::Red);
        assert!(position_in(
            &state.moves_of(chosen.piece_index),
            chosen.destination
        ));
        assert_eq!(
            chosen.state,
            state.apply_move(chosen.piece_index, chosen.destination)
        );
    }

    #[test]
    fn obvious_winning_capture_is_taken() {
        // Red rook next to the last enemy piece: taking it ends the game.
        let state = GameState {
            limits: crate::game_state::limits::Limits {
                lower: Position::new(2, 2),
                upper: Position::new(4, 6),
            },
            pieces: vec![
                Piece::new(Color::Red, Position::new(4, 4), Color::Green),
                Piece::new(Color::Green, Position::new(4, 6), Color::Green),
            ],
            turn: Color::Red,
        };
        let chosen =
            choose_successor(&state, Duration::from_millis(100)).expect("search should run");
        assert_eq!(chosen.destination, Position::new(4, 6));
        assert!(chosen.state.is_game_over());
    }
}
