//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of a game state for debugging, tests, and
//! the self-play demo. Each square shows either a piece (owner letter plus
//! effective role letter, e.g. `Rq` for a red queen), the lowercase field
//! color for an empty in-region square, or `··` outside the active region.

use crate::game_state::board_layout::field_color_at;
use crate::game_state::game_state::GameState;
use crate::game_state::game_types::Position;

/// Render the state to a string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8 {
        let rank = char::from(b'1' + (7 - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8 {
            let pos = Position::new(row, col);
            if let Some(index) = game_state.piece_index_at(pos) {
                let piece = &game_state.pieces[index];
                out.push(piece.owner.letter());
                out.push(piece.effective_role().letter());
            } else if game_state.limits.contains(pos) {
                out.push(field_color_at(pos).letter().to_ascii_lowercase());
                out.push(' ');
            } else {
                out.push_str("··");
            }
            out.push(' ');
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_shows_pieces_and_masks_shrunk_squares() {
        let state = GameState::begin_game([true, false, true, false])
            .expect("two players should start");
        let rendered = render_game_state(&state);

        // Red starts with a knight on a1.
        assert!(rendered.contains("Rn"));
        // Yellow material is present.
        assert!(rendered.contains('Y'));
        // The two-player start keeps the full board active here (the
        // starting squares span all rows and columns), so no masking.
        assert!(!rendered.contains("··"));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn shrunk_regions_are_masked() {
        use crate::game_state::game_types::Color;
        use crate::game_state::limits::Limits;
        use crate::game_state::piece_record::Piece;

        let state = GameState {
            limits: Limits {
                lower: Position::new(2, 2),
                upper: Position::new(4, 4),
            },
            pieces: vec![
                Piece::new(Color::Red, Position::new(3, 3), Color::Red),
                Piece::new(Color::Green, Position::new(2, 2), Color::Green),
            ],
            turn: Color::Red,
        };
        let rendered = render_game_state(&state);
        assert!(rendered.contains("··"));
    }
}
