//! Piece bookkeeping: the piece value type and the canonical start layout.

use crate::game_state::board_layout::field_color_at;
use crate::game_state::game_types::{Color, Position, Role};
use crate::game_state::role_table::RoleMap;

/// A single playable unit. Owner and role map are fixed for the piece's
/// lifetime; only the position changes. There is no promotion and no
/// respawn — a captured piece is simply dropped from the piece list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Color,
    pub position: Position,
    pub roles: RoleMap,
}

impl Piece {
    #[inline]
    pub fn new(owner: Color, position: Position, knight_color: Color) -> Self {
        Self {
            owner,
            position,
            roles: RoleMap::for_knight_color(knight_color),
        }
    }

    /// Current movement pattern, derived from the field color underneath.
    /// Role is position-derived, not limits-derived.
    #[inline]
    pub fn effective_role(&self) -> Role {
        self.roles.role_of(field_color_at(self.position))
    }
}

/// Start squares and knight colors per player, from the canonical layout:
/// RED along the bottom row, GREEN up the right edge, YELLOW along the top
/// row, BLUE down the left edge.
pub fn starting_pieces(owner: Color) -> [Piece; 4] {
    let layout: [(Position, Color); 4] = match owner {
        Color::Red => [
            (Position::new(7, 0), Color::Red),
            (Position::new(7, 1), Color::Green),
            (Position::new(7, 2), Color::Yellow),
            (Position::new(7, 3), Color::Blue),
        ],
        Color::Green => [
            (Position::new(7, 7), Color::Green),
            (Position::new(6, 7), Color::Yellow),
            (Position::new(5, 7), Color::Blue),
            (Position::new(4, 7), Color::Red),
        ],
        Color::Yellow => [
            (Position::new(0, 7), Color::Yellow),
            (Position::new(0, 6), Color::Blue),
            (Position::new(0, 5), Color::Red),
            (Position::new(0, 4), Color::Green),
        ],
        Color::Blue => [
            (Position::new(0, 0), Color::Blue),
            (Position::new(1, 0), Color::Red),
            (Position::new(2, 0), Color::Green),
            (Position::new(3, 0), Color::Yellow),
        ],
    };
    layout.map(|(position, knight_color)| Piece::new(owner, position, knight_color))
}
