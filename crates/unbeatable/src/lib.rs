//! Unbeatable - terminal host for the tic-tac-toe search engine.
//!
//! # Architecture
//!
//! - **Play**: interactive human-vs-engine loop over any reader/writer
//! - **Analyze**: per-move minimax scores for a given position
//! - **Verify**: self-play against a naive opponent from every opening
//! - **Demo**: a guided walk through the engine's decisions
//! - **Config**: TOML defaults for the interactive loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod demo;
pub mod play;
pub mod verify;

pub use cli::{Cli, Command, MarkArg};
pub use config::{ConfigError, FirstMover, PlayConfig};
pub use play::{PlaySession, Tally};
pub use verify::{Scenario, VerifyReport};
