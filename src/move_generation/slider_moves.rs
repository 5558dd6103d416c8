//! Sliding destination generation shared by bishop, rook, and queen roles.
//!
//! Each direction is walked one step at a time from the piece's square.
//! The walk accumulates empty in-region squares, includes the first
//! enemy-occupied square as a capture and stops there, and stops without
//! including the square on an own piece or the region edge.

use crate::game_state::game_types::Position;
use crate::game_state::limits::Limits;
use crate::game_state::piece_record::Piece;
use crate::move_generation::move_generator::{classify_destination, MoveClass};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks one ray, appending destinations until the walk terminates.
pub fn walk_direction(
    piece: &Piece,
    direction: (i8, i8),
    pieces: &[Piece],
    limits: Limits,
    out: &mut Vec<Position>,
) {
    let mut current = piece.position;
    loop {
        let Ok(next) = current.offset(direction.0, direction.1) else {
            return;
        };
        match classify_destination(piece.owner, next, pieces, limits) {
            MoveClass::Normal => {
                out.push(next);
                current = next;
            }
            MoveClass::Beating => {
                out.push(next);
                return;
            }
            MoveClass::Invalid => return,
        }
    }
}

pub fn generate_rook_moves(piece: &Piece, pieces: &[Piece], limits: Limits, out: &mut Vec<Position>) {
    for direction in ORTHOGONAL_DIRECTIONS {
        walk_direction(piece, direction, pieces, limits, out);
    }
}

pub fn generate_bishop_moves(piece: &Piece, pieces: &[Piece], limits: Limits, out: &mut Vec<Position>) {
    for direction in DIAGONAL_DIRECTIONS {
        walk_direction(piece, direction, pieces, limits, out);
    }
}

/// Queen destinations: the union of the bishop and rook walks.
pub fn generate_queen_moves(piece: &Piece, pieces: &[Piece], limits: Limits, out: &mut Vec<Position>) {
    generate_bishop_moves(piece, pieces, limits, out);
    generate_rook_moves(piece, pieces, limits, out);
}
