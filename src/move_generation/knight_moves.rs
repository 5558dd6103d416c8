//! Knight destination generation: the eight fixed jump offsets.

use crate::game_state::limits::Limits;
use crate::game_state::piece_record::Piece;
use crate::move_generation::move_generator::{classify_destination, MoveClass};
use crate::game_state::game_types::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Appends every legal knight destination for `piece` to `out`.
pub fn generate_knight_moves(piece: &Piece, pieces: &[Piece], limits: Limits, out: &mut Vec<Position>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Ok(candidate) = piece.position.offset(d_row, d_col) else {
            continue;
        };
        match classify_destination(piece.owner, candidate, pieces, limits) {
            MoveClass::Normal | MoveClass::Beating => out.push(candidate),
            MoveClass::Invalid => {}
        }
    }
}
