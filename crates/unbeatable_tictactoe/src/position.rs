//! Board positions and their tie-break weights.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Geometric class of a position, which fixes its tie-break weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    /// The single center cell.
    Center,
    /// One of the four corners.
    Corner,
    /// One of the four edge midpoints.
    Edge,
}

impl PositionKind {
    /// Tie-break weight: center > corners > edges.
    pub const fn weight(self) -> u8 {
        match self {
            PositionKind::Center => 5,
            PositionKind::Corner => 3,
            PositionKind::Edge => 2,
        }
    }
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the 1-9 numbering shown to human players.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Returns the 1-9 number shown to human players.
    pub const fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Parse from a 1-9 number or a label (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_number(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Returns the geometric class of this position.
    pub const fn kind(self) -> PositionKind {
        match self {
            Position::Center => PositionKind::Center,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight => {
                PositionKind::Corner
            }
            Position::TopCenter
            | Position::MiddleLeft
            | Position::MiddleRight
            | Position::BottomCenter => PositionKind::Edge,
        }
    }

    /// Tie-break weight of this position.
    pub const fn weight(self) -> u8 {
        self.kind().weight()
    }

    /// Filters positions by board state - returns only empty squares,
    /// in ascending index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
