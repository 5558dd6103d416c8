//! Static evaluation: one score per player.
//!
//! A player's raw score is the sum over their living pieces of a fixed
//! per-role value plus that piece's current mobility (legal move count).
//! Scores are published as normalized shares summing to 1.0, which is what
//! makes the branch-and-bound pruning in the maxⁿ search sound: shares are
//! non-negative and their total is fixed.

use crate::game_state::game_state::GameState;
use crate::game_state::game_types::Role;

/// Numeric representation of an evaluation score.
pub type Score = f32;

/// One score component per player, indexed by `Color::index()`.
pub type ScoreVector = [Score; 4];

/// Fixed per-role point values, ordered KNIGHT < BISHOP < ROOK < QUEEN.
#[inline]
pub fn role_value(role: Role) -> Score {
    match role {
        Role::Knight => 3.0,
        Role::Bishop => 3.5,
        Role::Rook => 5.0,
        Role::Queen => 9.0,
    }
}

/// Unnormalized material + mobility totals per player.
///
/// Terminal states are scored the same way; owning all remaining material
/// is its own reward, there is no separate win bonus.
pub fn raw_score(state: &GameState) -> ScoreVector {
    let mut totals: ScoreVector = [0.0; 4];
    for (index, piece) in state.pieces.iter().enumerate() {
        let mobility = state.moves_of(index).len() as Score;
        totals[piece.owner.index()] += role_value(piece.effective_role()) + mobility;
    }
    totals
}

/// Normalized score shares: non-negative, summing to 1.0.
pub fn score(state: &GameState) -> ScoreVector {
    let totals = raw_score(state);
    let sum: Score = totals.iter().sum();
    if sum <= 0.0 {
        // No material at all; nobody has a claim.
        return [0.25; 4];
    }
    totals.map(|t| t / sum)
}
