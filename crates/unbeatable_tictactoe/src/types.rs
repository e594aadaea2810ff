//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (conventionally goes first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: nine squares in row-major order. It is
/// cheap to copy, which lets the search work on a private scratch copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a player's mark at the given position.
    pub fn place(&mut self, pos: Position, player: Player) {
        self.set(pos, Square::Occupied(player));
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Counts the occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Formats the 1-9 position key shown to human players.
    pub fn guide() -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push_str(&format!(" {} ", row * 3 + col + 1));
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ' ',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, " {} ", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-----------\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character was not a mark or an empty-cell symbol.
    #[display("Unexpected character {:?} at cell {}", character, index)]
    InvalidCell {
        /// Offending character.
        character: char,
        /// Cell index (0-8) of the character.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (either case) are marks; `.`, `_`, `-`, space and the
    /// digits `1`-`9` are empty cells. `/` and `|` are ignored so rows may be
    /// written as `XO./.X./..O`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '/' | '|')).collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (index, &character) in cells.iter().enumerate() {
            squares[index] = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' | ' ' | '1'..='9' => Square::Empty,
                _ => return Err(BoardParseError::InvalidCell { character, index }),
            };
        }
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
