//! The shrinking active region of the board.
//!
//! Limits only ever shrink (or stay equal) over the life of a game and
//! bottom out at 3x3. The grow-back step of `recalc_limits` walks the four
//! edges in a fixed cycle; that order is a tested contract because it
//! decides the final rectangle when the bounding box is off-center.

use crate::game_state::game_types::Position;
use crate::game_state::piece_record::Piece;

/// Minimum width and height of the active region.
pub const MIN_SPAN: i8 = 3;

/// Inclusive sub-rectangle of the board currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub lower: Position,
    pub upper: Position,
}

/// Starting limits: the whole board.
pub const FULL_BOARD_LIMITS: Limits = Limits {
    lower: Position::new(0, 0),
    upper: Position::new(7, 7),
};

impl Limits {
    #[inline]
    pub const fn width(self) -> i8 {
        self.upper.col - self.lower.col + 1
    }

    #[inline]
    pub const fn height(self) -> i8 {
        self.upper.row - self.lower.row + 1
    }

    /// True at the 3x3 terminal size; a minimal region never re-expands.
    #[inline]
    pub const fn is_minimal(self) -> bool {
        self.width() == MIN_SPAN && self.height() == MIN_SPAN
    }

    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row >= self.lower.row
            && pos.row <= self.upper.row
            && pos.col >= self.lower.col
            && pos.col <= self.upper.col
    }

    /// The single middle square. Only meaningful for a minimal region,
    /// where it is the square of the deadlock rule.
    #[inline]
    pub const fn center(self) -> Position {
        Position::new(
            (self.lower.row + self.upper.row) / 2,
            (self.lower.col + self.upper.col) / 2,
        )
    }

    /// True if `self` fits entirely inside `outer`.
    #[inline]
    pub const fn is_within(self, outer: Limits) -> bool {
        self.lower.row >= outer.lower.row
            && self.lower.col >= outer.lower.col
            && self.upper.row <= outer.upper.row
            && self.upper.col <= outer.upper.col
    }
}

/// Recomputes the active region after a move.
///
/// A region already at 3x3 is returned unchanged. Otherwise the tight
/// bounding box of the living pieces is taken and, while either dimension
/// is under 3, grown back toward `previous` one edge step at a time in the
/// fixed cycle: lower.row down, upper.row up, lower.col down, upper.col up.
/// An edge only moves while its dimension is still under minimum and the
/// step stays inside `previous`.
pub fn recalc_limits(pieces: &[Piece], previous: Limits) -> Limits {
    if previous.is_minimal() {
        return previous;
    }
    if pieces.is_empty() {
        // Bounding box of nothing is undefined; fall back to the start.
        return FULL_BOARD_LIMITS;
    }

    let mut lower = pieces[0].position;
    let mut upper = pieces[0].position;
    for piece in &pieces[1..] {
        lower.row = lower.row.min(piece.position.row);
        lower.col = lower.col.min(piece.position.col);
        upper.row = upper.row.max(piece.position.row);
        upper.col = upper.col.max(piece.position.col);
    }
    let mut limits = Limits { lower, upper };

    while limits.height() < MIN_SPAN || limits.width() < MIN_SPAN {
        if limits.height() < MIN_SPAN && limits.lower.row > previous.lower.row {
            limits.lower.row -= 1;
        }
        if limits.height() < MIN_SPAN && limits.upper.row < previous.upper.row {
            limits.upper.row += 1;
        }
        if limits.width() < MIN_SPAN && limits.lower.col > previous.lower.col {
            limits.lower.col -= 1;
        }
        if limits.width() < MIN_SPAN && limits.upper.col < previous.upper.col {
            limits.upper.col += 1;
        }
    }

    limits
}
