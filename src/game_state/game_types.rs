/// Core value types for the four-player shrinking-board variant.
///
/// `Color` pulls double duty: it names the four players and it names the
/// four field colors of the board. `Role` is the movement pattern a piece
/// currently has, derived from the field color it stands on.

use crate::errors::Errors;

/// Player identity and field color share the same 4-valued domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

/// All colors in role-rotation order (the order the role permutations cycle
/// through). This is distinct from the turn order below.
pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

/// Fixed turn rotation. Not the clockwise board order.
pub const TURN_ORDER: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }
}

/// Movement pattern of a piece. There is no pawn-like role; every piece is
/// one of these four depending on the field it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Knight,
    Queen,
    Bishop,
    Rook,
}

impl Role {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Role::Knight => 0,
            Role::Queen => 1,
            Role::Bishop => 2,
            Role::Rook => 3,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Role::Knight => 'n',
            Role::Queen => 'q',
            Role::Bishop => 'b',
            Role::Rook => 'r',
        }
    }
}

/// A square on the 8x8 board. Row 0 is the top row of the canonical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True if the position lies on the physical 8x8 board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row <= 7 && self.col >= 0 && self.col <= 7
    }

    /// Offsets the position, failing if the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Result<Position, Errors> {
        let y = Position::new(self.row + d_row, self.col + d_col);
        if y.is_valid() {
            Ok(y)
        } else {
            Err(Errors::OutOfBounds)
        }
    }
}

/// Membership test over a plain position list.
#[inline]
pub fn position_in(list: &[Position], pos: Position) -> bool {
    list.iter().any(|&p| p == pos)
}
