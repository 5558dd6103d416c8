//! Text coordinates for squares.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and `Position`
//! values for logs, rendering, and tests. Files run a-h left to right;
//! ranks run 1-8 bottom to top, so row 7 of the layout is rank 1.

use crate::game_state::game_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(Position::new(row, col))
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(pos: Position) -> Result<String, String> {
    if !pos.is_valid() {
        return Err(format!("Position off the board: ({},{})", pos.row, pos.col));
    }

    let file_char = char::from(b'a' + pos.col as u8);
    let rank_char = char::from(b'1' + (7 - pos.row) as u8);
    Ok(format!("{file_char}{rank_char}"))
}
