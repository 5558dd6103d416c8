/// Represents all possible error types that can occur in the rules engine
/// and the move-search layer. Used throughout the codebase for error
/// handling and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the 8x8 board.
    OutOfBounds,
    /// A game needs at least two participating players.
    NotEnoughPlayers,
    /// Attempted to move in a game that already has a winner.
    GameAlreadyOver,
    /// The addressed piece does not belong to the player whose turn it is.
    NotYourTurn,
    /// The piece index does not address a living piece.
    InvalidPieceIndex,
    /// The destination is not a legal move for the addressed piece.
    IllegalDestination,
    /// A game state failed structural or semantic validation.
    InvalidGameState,
    /// The player to move has pieces but no legal move available.
    NoLegalMoves,
    /// The move search exceeded its hard time ceiling.
    SearchTimeout,
}

impl std::fmt::Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
