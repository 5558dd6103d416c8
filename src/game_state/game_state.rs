//! Whole-state transitions of the game.
//!
//! `GameState` is a deep, independent snapshot: every transition clones and
//! returns a new value, so the search tree can branch freely over shared
//! history without aliasing hazards. The rules engine is purely functional
//! and safe to call from any number of threads.

use crate::errors::Errors;
use crate::game_state::game_types::{position_in, Color, Position, Role, TURN_ORDER};
use crate::game_state::limits::{recalc_limits, Limits, FULL_BOARD_LIMITS, MIN_SPAN};
use crate::game_state::piece_record::{starting_pieces, Piece};
use crate::move_generation::move_generator::moves_for;

/// A complete snapshot of a running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub limits: Limits,
    pub pieces: Vec<Piece>,
    pub turn: Color,
}

/// One reachable follow-up state, tagged with the move that produced it.
#[derive(Debug, Clone)]
pub struct Successor {
    pub piece_index: usize,
    pub destination: Position,
    pub state: GameState,
}

impl GameState {
    /// Starts a game for the selected participants.
    ///
    /// Fails with `NotEnoughPlayers` below two participants. The initial
    /// limits are the recalculated bounding box of the starting squares,
    /// and the first participant in turn order moves first.
    pub fn begin_game(participants: [bool; 4]) -> Result<Self, Errors> {
        let player_count = participants.iter().filter(|&&p| p).count();
        if player_count < 2 {
            return Err(Errors::NotEnoughPlayers);
        }

        let mut pieces = Vec::with_capacity(player_count * 4);
        for color in TURN_ORDER {
            if participants[color.index()] {
                pieces.extend_from_slice(&starting_pieces(color));
            }
        }

        let limits = recalc_limits(&pieces, FULL_BOARD_LIMITS);
        let turn = TURN_ORDER
            .into_iter()
            .find(|c| participants[c.index()])
            .ok_or(Errors::NotEnoughPlayers)?;

        Ok(Self {
            limits,
            pieces,
            turn,
        })
    }

    /// Index of the living piece on `position`, if any.
    pub fn piece_index_at(&self, position: Position) -> Option<usize> {
        self.pieces.iter().position(|p| p.position == position)
    }

    /// Which players still own at least one piece, by `Color::index()`.
    pub fn players_alive(&self) -> [bool; 4] {
        let mut alive = [false; 4];
        for piece in &self.pieces {
            alive[piece.owner.index()] = true;
        }
        alive
    }

    /// The game is over once fewer than two distinct owners remain.
    pub fn is_game_over(&self) -> bool {
        self.players_alive().iter().filter(|&&a| a).count() < 2
    }

    /// Legal destinations for the piece at `piece_index` in this state.
    pub fn moves_of(&self, piece_index: usize) -> Vec<Position> {
        moves_for(piece_index, &self.pieces, self.limits)
    }

    /// Applies a pre-validated move and returns the new state.
    ///
    /// Steps: move the piece, resolve the capture, recalculate the limits,
    /// apply the center-knight deadlock rule, advance the turn. Callers
    /// must pass a legal move; the search layer only ever enumerates legal
    /// moves, and external input goes through `check_and_apply_move`.
    pub fn apply_move(&self, piece_index: usize, destination: Position) -> GameState {
        let captured = self
            .pieces
            .iter()
            .position(|p| p.position == destination)
            .filter(|&i| i != piece_index);

        let mut pieces: Vec<Piece> = Vec::with_capacity(self.pieces.len());
        for (i, piece) in self.pieces.iter().enumerate() {
            if Some(i) == captured {
                continue;
            }
            let mut moved = *piece;
            if i == piece_index {
                moved.position = destination;
            }
            pieces.push(moved);
        }

        let limits = recalc_limits(&pieces, self.limits);
        remove_center_knight_if_trapped(&mut pieces, limits);
        let turn = next_turn(self.turn, &pieces);

        GameState {
            limits,
            pieces,
            turn,
        }
    }

    /// Validating entry point for external callers.
    pub fn check_and_apply_move(
        &self,
        piece_index: usize,
        destination: Position,
    ) -> Result<GameState, Errors> {
        if self.is_game_over() {
            return Err(Errors::GameAlreadyOver);
        }
        let piece = self
            .pieces
            .get(piece_index)
            .ok_or(Errors::InvalidPieceIndex)?;
        if piece.owner != self.turn {
            return Err(Errors::NotYourTurn);
        }
        if !position_in(&self.moves_of(piece_index), destination) {
            return Err(Errors::IllegalDestination);
        }
        Ok(self.apply_move(piece_index, destination))
    }

    /// Every state reachable by one move of the player to move.
    pub fn enumerate_successors(&self) -> Vec<Successor> {
        let mut successors = Vec::new();
        for piece_index in 0..self.pieces.len() {
            if self.pieces[piece_index].owner != self.turn {
                continue;
            }
            for destination in self.moves_of(piece_index) {
                successors.push(Successor {
                    piece_index,
                    destination,
                    state: self.apply_move(piece_index, destination),
                });
            }
        }
        successors
    }

    /// Structural and semantic validation of a candidate state.
    pub fn is_valid(&self) -> bool {
        if !self.limits.is_within(FULL_BOARD_LIMITS)
            || self.limits.width() < MIN_SPAN
            || self.limits.height() < MIN_SPAN
        {
            return false;
        }
        for (i, piece) in self.pieces.iter().enumerate() {
            if !piece.position.is_valid() || !self.limits.contains(piece.position) {
                return false;
            }
            if self.pieces[..i].iter().any(|p| p.position == piece.position) {
                return false;
            }
        }
        self.pieces.iter().any(|p| p.owner == self.turn)
    }
}

/// The deadlock rule: a knight stranded on the center of a fully shrunk
/// board has no legal knight move and is eliminated. The removal is
/// skipped when the state is already decided, so a winning capture is
/// never undone by this rule.
fn remove_center_knight_if_trapped(pieces: &mut Vec<Piece>, limits: Limits) {
    if !limits.is_minimal() {
        return;
    }
    let center = limits.center();
    let Some(center_index) = pieces.iter().position(|p| p.position == center) else {
        return;
    };
    if pieces[center_index].effective_role() != Role::Knight {
        return;
    }
    let distinct_owners = {
        let mut owners = [false; 4];
        for piece in pieces.iter() {
            owners[piece.owner.index()] = true;
        }
        owners.iter().filter(|&&o| o).count()
    };
    if distinct_owners >= 2 {
        pieces.remove(center_index);
    }
}

/// Next living player in the fixed rotation, skipping the eliminated.
/// With no other player left the turn stays where it is.
fn next_turn(current: Color, pieces: &[Piece]) -> Color {
    let start = TURN_ORDER
        .iter()
        .position(|&c| c == current)
        .unwrap_or(0);
    for step in 1..=TURN_ORDER.len() {
        let candidate = TURN_ORDER[(start + step) % TURN_ORDER.len()];
        if pieces.iter().any(|p| p.owner == candidate) {
            return candidate;
        }
    }
    current
}
