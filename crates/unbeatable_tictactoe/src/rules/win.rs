//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true iff `player` holds all three squares of some line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, testing X
/// before O, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(board, player))
}
