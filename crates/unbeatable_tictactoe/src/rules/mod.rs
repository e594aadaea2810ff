//! Game rules for tic-tac-toe.
//!
//! Pure, total functions over any nine-square board. Rules are kept
//! apart from board storage so the search and the game bookkeeping
//! share one definition of "terminal".

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::available_moves;
pub use win::{LINES, check_winner, is_winner};

use super::{Board, GameStatus};

/// Classifies a board as won, drawn or still in progress.
///
/// X is tested before O, so a malformed board with two completed
/// lines reports X as the winner.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
