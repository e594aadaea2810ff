//! Interactive human-vs-engine game loop.
//!
//! The loop talks to any `BufRead`/`Write` pair so it runs the same on a
//! terminal and on scripted input. End of input ends the session quietly.

use crate::config::{FirstMover, PlayConfig};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use unbeatable_tictactoe::{Board, Game, GameStatus, MoveError, Player, Position};

/// Results over a session of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games played to a result.
    pub games: u32,
    /// Games the human won.
    pub human_wins: u32,
    /// Games the engine won.
    pub engine_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

/// How a single game ended.
enum GameEnd {
    Finished(GameStatus),
    InputClosed,
}

/// An interactive session bound to an input and an output stream.
pub struct PlaySession<R, W> {
    config: PlayConfig,
    input: R,
    output: W,
    tally: Tally,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    /// Creates a session.
    pub fn new(config: PlayConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            tally: Tally::default(),
        }
    }

    /// Plays games until the player declines another or input ends.
    #[instrument(skip(self), fields(human = %self.config.human_mark()))]
    pub fn run(mut self) -> Result<Tally> {
        writeln!(self.output, "=== TIC-TAC-TOE ===")?;
        writeln!(
            self.output,
            "You are {}, the engine is {}",
            self.config.human_mark(),
            self.config.engine_mark()
        )?;
        writeln!(self.output, "The engine searches every line of play - it cannot lose.")?;

        loop {
            let Some(first) = self.choose_first()? else {
                break;
            };

            match self.play_game(first)? {
                GameEnd::Finished(status) => self.record(status),
                GameEnd::InputClosed => break,
            }

            if !*self.config.play_again_prompt() || !self.ask_play_again()? {
                break;
            }
        }

        info!(tally = ?self.tally, "Session ended");
        Ok(self.tally)
    }

    /// Resolves the first mover, prompting if configured to ask.
    fn choose_first(&mut self) -> Result<Option<Player>> {
        let human = *self.config.human_mark();
        let engine = self.config.engine_mark();

        match self.config.first() {
            FirstMover::Human => return Ok(Some(human)),
            FirstMover::Engine => return Ok(Some(engine)),
            FirstMover::Ask => {}
        }

        loop {
            write!(self.output, "\nWho goes first? (h)uman or (e)ngine: ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "h" | "human" => return Ok(Some(human)),
                "e" | "engine" | "a" | "ai" => return Ok(Some(engine)),
                _ => writeln!(self.output, "Please enter 'h' for human or 'e' for engine")?,
            }
        }
    }

    fn play_game(&mut self, first: Player) -> Result<GameEnd> {
        let human = *self.config.human_mark();
        let mut game = Game::new(first);
        debug!(first = %first, "Game started");

        while !game.status().is_over() {
            self.show_board(game.board())?;

            if game.to_move() == human {
                if !self.human_turn(&mut game)? {
                    return Ok(GameEnd::InputClosed);
                }
            } else {
                writeln!(self.output, "Engine is thinking...")?;
                match game.engine_move()? {
                    Some(position) => {
                        writeln!(self.output, "Engine chooses position {}", position.number())?
                    }
                    None => {
                        warn!("Engine found no move on an unfinished game");
                        break;
                    }
                }
            }
        }

        self.show_board(game.board())?;
        let status = game.status();
        match status {
            GameStatus::Won(player) if player == human => writeln!(
                self.output,
                "Congratulations! You won! (This shouldn't happen against a perfect engine)"
            )?,
            GameStatus::Won(_) => writeln!(self.output, "Engine wins! Better luck next time!")?,
            _ => writeln!(self.output, "It's a draw!")?,
        }
        Ok(GameEnd::Finished(status))
    }

    /// Reads moves until one is legal. Returns false when input ends.
    fn human_turn(&mut self, game: &mut Game) -> Result<bool> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };

            let Some(position) = Position::from_label_or_number(&answer) else {
                writeln!(self.output, "Invalid move! Choose an empty position (1-9).")?;
                continue;
            };

            match game.make_move(position) {
                Ok(()) => return Ok(true),
                Err(MoveError::SquareOccupied(_)) => {
                    writeln!(self.output, "Invalid move! Choose an empty position (1-9).")?
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "\nPlay again? (y/n): ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.to_lowercase().starts_with('y')))
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "\n{}\n", board)?;
        if *self.config.show_guide() {
            writeln!(self.output, "Positions:\n{}\n", Board::guide())?;
        }
        Ok(())
    }

    fn record(&mut self, status: GameStatus) {
        self.tally.games += 1;
        match status {
            GameStatus::Won(player) if player == *self.config.human_mark() => {
                self.tally.human_wins += 1
            }
            GameStatus::Won(_) => self.tally.engine_wins += 1,
            _ => self.tally.draws += 1,
        }
    }

    /// Reads one trimmed line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
