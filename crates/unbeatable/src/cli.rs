//! Command-line interface for unbeatable.

use crate::config::FirstMover;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unbeatable_tictactoe::Player;

/// Unbeatable - a tic-tac-toe engine that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "unbeatable.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Mark the human plays (overrides config)
        #[arg(long, value_enum, ignore_case = true)]
        human: Option<MarkArg>,

        /// Who moves first (overrides config)
        #[arg(long, value_enum)]
        first: Option<FirstMover>,

        /// Hide the 1-9 position guide
        #[arg(long)]
        no_guide: bool,
    },

    /// Score every legal move of a position
    Analyze {
        /// Nine cells in row-major order, e.g. "XX.O....." or "XX./O../..."
        #[arg(short, long)]
        board: String,

        /// Mark the engine plays (default: the side to move)
        #[arg(short, long, value_enum, ignore_case = true)]
        engine: Option<MarkArg>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Play the engine against a first-free-square opponent from every opening
    Verify,

    /// Walk through the engine's opening decisions and search statistics
    Demo,
}

/// Player mark as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}
