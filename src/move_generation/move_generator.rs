//! Per-piece legal move generation.
//!
//! Dispatches on the piece's effective role and classifies candidate
//! squares against the active region and the occupancy of both sides.
//! Generation order is direction order then distance order; callers that
//! need a canonical ordering must sort.

use crate::game_state::game_types::{Color, Position, Role};
use crate::game_state::limits::Limits;
use crate::game_state::piece_record::Piece;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::slider_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Classification of a candidate destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    /// Out of the active region, or occupied by a piece of the mover.
    Invalid,
    /// Empty square inside the active region.
    Normal,
    /// Opponent-occupied square inside the active region; a capture.
    Beating,
}

/// Classifies `destination` for a piece owned by `mover`.
pub fn classify_destination(
    mover: Color,
    destination: Position,
    pieces: &[Piece],
    limits: Limits,
) -> MoveClass {
    if !limits.contains(destination) {
        return MoveClass::Invalid;
    }
    match pieces.iter().find(|p| p.position == destination) {
        Some(occupant) if occupant.owner == mover => MoveClass::Invalid,
        Some(_) => MoveClass::Beating,
        None => MoveClass::Normal,
    }
}

/// All legal destinations for the piece at `piece_index`.
///
/// Returns an empty list for an out-of-range index.
pub fn moves_for(piece_index: usize, pieces: &[Piece], limits: Limits) -> Vec<Position> {
    let Some(piece) = pieces.get(piece_index) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.effective_role() {
        Role::Knight => generate_knight_moves(piece, pieces, limits, &mut out),
        Role::Bishop => generate_bishop_moves(piece, pieces, limits, &mut out),
        Role::Rook => generate_rook_moves(piece, pieces, limits, &mut out),
        Role::Queen => generate_queen_moves(piece, pieces, limits, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_types::position_in;
    use crate::game_state::limits::FULL_BOARD_LIMITS;

    // (3,3) is a Yellow field, so a knight there needs the map that sends
    // Yellow to KNIGHT, a bishop needs Yellow->BISHOP, and so on.
    fn lone_piece(knight_color: Color) -> Piece {
        Piece::new(Color::Red, Position::new(3, 3), knight_color)
    }

    #[test]
    fn knight_on_open_board_has_eight_moves() {
        let pieces = [lone_piece(Color::Yellow)];
        assert_eq!(pieces[0].effective_role(), Role::Knight);
        let moves = moves_for(0, &pieces, FULL_BOARD_LIMITS);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_cornering_three_by_three_has_two_moves() {
        let pieces = [lone_piece(Color::Yellow)];
        let limits = Limits {
            lower: Position::new(1, 1),
            upper: Position::new(3, 3),
        };
        let moves = moves_for(0, &pieces, limits);
        assert_eq!(moves.len(), 2);
        assert!(position_in(&moves, Position::new(1, 2)));
        assert!(position_in(&moves, Position::new(2, 1)));
    }

    #[test]
    fn slider_counts_on_open_board_match_the_walk_lengths() {
        // On the Yellow field at (3,3) the Red anchor yields a bishop, the
        // Blue anchor a rook, and the Green anchor a queen.
        let bishop = [lone_piece(Color::Red)];
        assert_eq!(bishop[0].effective_role(), Role::Bishop);
        assert_eq!(moves_for(0, &bishop, FULL_BOARD_LIMITS).len(), 13);

        let rook = [lone_piece(Color::Blue)];
        assert_eq!(rook[0].effective_role(), Role::Rook);
        assert_eq!(moves_for(0, &rook, FULL_BOARD_LIMITS).len(), 14);

        let queen = [lone_piece(Color::Green)];
        assert_eq!(queen[0].effective_role(), Role::Queen);
        assert_eq!(moves_for(0, &queen, FULL_BOARD_LIMITS).len(), 27);
    }

    #[test]
    fn moves_never_leave_limits_nor_hit_own_pieces() {
        let pieces = [
            lone_piece(Color::Blue), // rook at (3,3)
            Piece::new(Color::Red, Position::new(3, 5), Color::Red),
            Piece::new(Color::Green, Position::new(5, 3), Color::Green),
        ];
        let limits = Limits {
            lower: Position::new(1, 1),
            upper: Position::new(6, 6),
        };
        let moves = moves_for(0, &pieces, limits);
        for &m in &moves {
            assert!(limits.contains(m));
            assert_ne!(m, Position::new(3, 5), "landed on own piece");
        }
        // The enemy rook square is a capture destination.
        assert!(position_in(&moves, Position::new(5, 3)));
        // The walk stops at the capture; the square behind stays illegal.
        assert!(!position_in(&moves, Position::new(6, 3)));
    }

    #[test]
    fn capture_squares_classify_as_beating() {
        let pieces = [
            lone_piece(Color::Blue),
            Piece::new(Color::Green, Position::new(3, 6), Color::Green),
        ];
        assert_eq!(
            classify_destination(Color::Red, Position::new(3, 6), &pieces, FULL_BOARD_LIMITS),
            MoveClass::Beating
        );
        assert_eq!(
            classify_destination(Color::Red, Position::new(3, 3), &pieces, FULL_BOARD_LIMITS),
            MoveClass::Invalid
        );
        assert_eq!(
            classify_destination(Color::Red, Position::new(0, 0), &pieces, FULL_BOARD_LIMITS),
            MoveClass::Normal
        );
    }

    #[test]
    fn out_of_range_index_yields_no_moves() {
        let pieces = [lone_piece(Color::Yellow)];
        assert!(moves_for(5, &pieces, FULL_BOARD_LIMITS).is_empty());
    }
}
