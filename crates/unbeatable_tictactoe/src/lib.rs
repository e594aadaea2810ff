//! Unbeatable tic-tac-toe.
//!
//! An exhaustive game-search engine for the 3x3 board: minimax with
//! alpha-beta pruning, depth-sensitive terminal scores (faster wins and
//! slower losses score higher) and deterministic tie-breaking among
//! equally scored moves (center, then corners, then edges, then lowest
//! index).
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Player, Position, best_move};
//!
//! let board: Board = "XX.......".parse().unwrap();
//! assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
//! ```
//!
//! The engine keeps no state between calls. `Game` is an optional
//! caller-side record for hosting loops.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::{Position, PositionKind};
pub use rules::{LINES, available_moves, check_winner, is_draw, is_full, is_winner, status};
pub use search::{
    Analysis, MoveEvaluation, Pruning, Score, SearchStats, Searcher, Verdict, analyze,
    best_move, minimax,
};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
