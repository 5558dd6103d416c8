//! Field-color to role permutations.
//!
//! A piece's role map is always one of four cyclic rotations of the
//! canonical assignment RED->KNIGHT, GREEN->QUEEN, YELLOW->BISHOP,
//! BLUE->ROOK. Each rotation is identified by the color it sends to
//! KNIGHT (the piece's "knight color"). Arbitrary color->role mappings
//! are invalid even when every value is a well-formed role.

use crate::game_state::game_types::{Color, Role, ALL_COLORS};

/// Total mapping field-Color -> Role, indexed by `Color::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMap {
    assignment: [Role; 4],
}

/// The four valid permutations, indexed by knight color.
const ROLE_TABLE: [[Role; 4]; 4] = [
    // knight color Red
    [Role::Knight, Role::Queen, Role::Bishop, Role::Rook],
    // knight color Green
    [Role::Rook, Role::Knight, Role::Queen, Role::Bishop],
    // knight color Yellow
    [Role::Bishop, Role::Rook, Role::Knight, Role::Queen],
    // knight color Blue
    [Role::Queen, Role::Bishop, Role::Rook, Role::Knight],
];

impl RoleMap {
    /// The permutation anchored at the given knight color.
    #[inline]
    pub const fn for_knight_color(knight_color: Color) -> Self {
        Self {
            assignment: ROLE_TABLE[knight_color.index()],
        }
    }

    /// Role a piece with this map has while standing on `field_color`.
    #[inline]
    pub const fn role_of(self, field_color: Color) -> Role {
        self.assignment[field_color.index()]
    }

    /// Builds a map from a raw assignment, rejecting anything outside the
    /// four rotations. This is the only construction path for external
    /// input; internal code goes through `for_knight_color`.
    pub fn from_assignment(assignment: [Role; 4]) -> Result<Self, crate::errors::Errors> {
        if is_valid_role_map(&assignment) {
            Ok(Self { assignment })
        } else {
            Err(crate::errors::Errors::InvalidGameState)
        }
    }

    /// The color this map sends to KNIGHT; identifies the permutation.
    pub fn knight_color(self) -> Color {
        for color in ALL_COLORS {
            if matches!(self.role_of(color), Role::Knight) {
                return color;
            }
        }
        // Construction only goes through the table, so a map without a
        // knight color is unreachable.
        unreachable!("role map lost its knight color")
    }
}

/// True iff the raw assignment is one of the four rotational permutations.
///
/// Rejects well-typed but non-cyclic maps, e.g. two colors both mapping to
/// KNIGHT, or a swap of two roles inside an otherwise valid rotation.
pub fn is_valid_role_map(assignment: &[Role; 4]) -> bool {
    ROLE_TABLE.iter().any(|valid| valid == assignment)
}
