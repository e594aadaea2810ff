//! First-class move events for tic-tac-toe.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),
}
