//! Game bookkeeping for a hosting loop.
//!
//! The engine itself is stateless; `Game` is the caller-side record of
//! whose turn it is, what has been played and whether play has ended.

use super::action::{Move, MoveError};
use super::rules;
use super::search::best_move;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A tic-tac-toe game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty board.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self::from_board(Board::new(), first_player)
    }

    /// Resumes a game from an arbitrary board. History starts empty.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            status: rules::status(&board),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played through this value.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `position` for the player to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        self.apply(Move::new(self.to_move, position))
    }

    /// Applies a fully specified move.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }

        self.board.place(mov.position, mov.player);
        self.history.push(mov);
        self.to_move = mov.player.opponent();
        self.status = rules::status(&self.board);

        debug!(%mov, status = %self.status, "Move applied");
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game finished");
        }
        Ok(())
    }

    /// Lets the engine play for the side to move and commits its choice.
    ///
    /// Returns `Ok(None)` when there is no empty square left.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<Option<Position>, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let Some(position) = best_move(&self.board, self.to_move) else {
            return Ok(None);
        };
        self.make_move(position)?;
        Ok(Some(position))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_alternate() {
        let mut game = Game::new(Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.make_move(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new(Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new(Player::X);
        assert_eq!(
            game.apply(Move::new(Player::O, Position::Center)),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Player::X);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            game.make_move(Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_engine_move_commits_choice() {
        let mut game = Game::new(Player::O);
        let chosen = game.engine_move().unwrap();
        assert_eq!(chosen, Some(Position::Center));
        assert!(!game.board().is_empty(Position::Center));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_engine_move_after_game_over() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let mut game = Game::from_board(board, Player::X);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.engine_move(), Err(MoveError::GameOver));
    }
}
