//! Legal move enumeration.

use super::super::{Board, Position};

/// All empty positions in ascending index order.
///
/// The ordering fixes both search order and tie-break order in the
/// move selector.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
