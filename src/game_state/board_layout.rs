//! The fixed field-color layout of the board.
//!
//! Move legality and the scoring heuristic both key off exact field colors,
//! so this table is a bit-for-bit constant. It is never mutated and callers
//! may cache the reference.

use crate::game_state::game_types::{Color, Position};

use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

/// The canonical 8x8 field-color matrix, row-major, row 0 first.
pub const BOARD_LAYOUT: [[Color; 8]; 8] = [
    [B, R, B, Y, G, R, B, Y],
    [R, G, R, B, Y, G, R, B],
    [G, Y, R, G, R, B, B, Y],
    [Y, B, G, Y, G, R, Y, G],
    [B, R, Y, B, R, B, G, R],
    [R, G, G, Y, B, Y, R, B],
    [G, Y, B, R, G, Y, B, Y],
    [R, G, Y, B, R, G, Y, G],
];

/// The whole layout, for callers that want to render or cache it.
#[inline]
pub fn board_layout() -> &'static [[Color; 8]; 8] {
    &BOARD_LAYOUT
}

/// Field color under a position. The position must be on the board.
#[inline]
pub fn field_color_at(pos: Position) -> Color {
    BOARD_LAYOUT[pos.row as usize][pos.col as usize]
}
