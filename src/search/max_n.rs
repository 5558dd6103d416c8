//! Recursive maxⁿ search.
//!
//! Unlike two-player minimax, every player maximizes their own component
//! of the score vector at their decision nodes, and the full vector is
//! propagated upward so each ancestor sees every player's projected share.
//!
//! Shares are non-negative and sum to 1.0 at every node, which admits a
//! shallow branch-and-bound cut: once the mover's best share reaches the
//! budget the parent still has available (`prune_above`), no sibling can
//! change the parent's choice, so the scan stops.

use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{score, Score, ScoreVector};

/// Share total at every node; pass as the root `prune_above` bound.
pub const NO_PRUNING_BOUND: Score = 1.0;

/// Adaptive search depth by living piece count.
///
/// With many pieces the branching factor explodes, so the horizon stays
/// short; near the endgame deep tactical sequences must resolve fully.
/// Tunable constants, not a contract.
pub fn depth_for_piece_count(piece_count: usize) -> u8 {
    match piece_count {
        0..=3 => 6,
        4..=6 => 5,
        7..=10 => 4,
        _ => 3,
    }
}

/// Evaluates `state` to `depth` plies and returns the score vector of the
/// line every player would pick for themselves.
///
/// Ties between equally good successors are broken uniformly at random;
/// determinism is not part of the contract.
pub fn search_value<R: Rng>(
    state: &GameState,
    depth: u8,
    prune_above: Score,
    rng: &mut R,
    nodes: &mut u64,
) -> ScoreVector {
    *nodes += 1;

    if depth == 0 || state.is_game_over() {
        return score(state);
    }

    let successors = state.enumerate_successors();
    if successors.is_empty() {
        // Mover is alive but has no legal move; score the state as it
        // stands rather than inventing a pass.
        return score(state);
    }

    let mover = state.turn.index();
    let mut best: ScoreVector = [0.0; 4];
    let mut best_share: Score = -1.0;
    let mut tie_count: u32 = 0;

    for successor in &successors {
        let child_bound = NO_PRUNING_BOUND - best_share.max(0.0);
        let value = search_value(&successor.state, depth - 1, child_bound, rng, nodes);

        if value[mover] > best_share {
            best = value;
            best_share = value[mover];
            tie_count = 1;
        } else if value[mover] == best_share {
            tie_count += 1;
            if rng.random_range(0..tie_count) == 0 {
                best = value;
            }
        }

        if best_share >= prune_above {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_types::{Color, Position};
    use crate::game_state::limits::{Limits, FULL_BOARD_LIMITS};
    use crate::game_state::piece_record::Piece;

    fn rng() -> impl Rng {
        use rand::SeedableRng;
        rand::rngs::StdRng::seed_from_u64(7)
    }

    #[test]
    fn depth_zero_returns_the_static_score() {
        let state = GameState::begin_game([true; 4]).expect("game should start");
        let mut nodes = 0;
        let value = search_value(&state, 0, NO_PRUNING_BOUND, &mut rng(), &mut nodes);
        assert_eq!(value, score(&state));
        assert_eq!(nodes, 1);
    }

    #[test]
    fn finished_games_are_leaves_at_any_depth() {
        let state = GameState {
            limits: FULL_BOARD_LIMITS,
            pieces: vec![Piece::new(Color::Red, Position::new(4, 4), Color::Green)],
            turn: Color::Red,
        };
        let mut nodes = 0;
        let value = search_value(&state, 5, NO_PRUNING_BOUND, &mut rng(), &mut nodes);
        assert_eq!(value, score(&state));
        assert_eq!(nodes, 1);
    }

    #[test]
    fn mover_prefers_the_capture_that_wins_the_game() {
        // Two pieces, one move from contact: Red to move as a rook can
        // take the last Green piece and own the whole board.
        let state = GameState {
            limits: Limits {
                lower: Position::new(2, 2),
                upper: Position::new(4, 6),
            },
            pieces: vec![
                Piece::new(Color::Red, Position::new(4, 4), Color::Green),
                Piece::new(Color::Green, Position::new(4, 6), Color::Green),
            ],
            turn: Color::Red,
        };

        let mut nodes = 0;
        let mut r = rng();
        let successors = state.enumerate_successors();
        let mut best_share = -1.0;
        let mut best_index = 0;
        for (i, successor) in successors.iter().enumerate() {
            let v = search_value(&successor.state, 1, NO_PRUNING_BOUND, &mut r, &mut nodes);
            if v[Color::Red.index()] > best_share {
                best_share = v[Color::Red.index()];
                best_index = i;
            }
        }
        assert_eq!(successors[best_index].destination, Position::new(4, 6));
        assert_eq!(best_share, 1.0);
    }

    #[test]
    fn search_vectors_stay_normalized() {
        let state = GameState::begin_game([true, true, false, false]).expect("game should start");
        let mut nodes = 0;
        let value = search_value(&state, 2, NO_PRUNING_BOUND, &mut rng(), &mut nodes);
        let sum: Score = value.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4, "vector sums to {}", sum);
        assert!(nodes > 1);
    }

    #[test]
    fn pruning_bound_cuts_the_sibling_scan() {
        let state = GameState::begin_game([true; 4]).expect("game should start");
        let mut full_nodes = 0;
        let mut pruned_nodes = 0;
        let _ = search_value(&state, 2, NO_PRUNING_BOUND, &mut rng(), &mut full_nodes);
        // A zero budget makes the first successor unbeatable.
        let _ = search_value(&state, 2, 0.0, &mut rng(), &mut pruned_nodes);
        assert!(pruned_nodes < full_nodes);
    }

    #[test]
    fn adaptive_depth_deepens_as_material_thins() {
        assert!(depth_for_piece_count(16) < depth_for_piece_count(8));
        assert!(depth_for_piece_count(8) < depth_for_piece_count(5));
        assert!(depth_for_piece_count(5) < depth_for_piece_count(2));
    }
}
