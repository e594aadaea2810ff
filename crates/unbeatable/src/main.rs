//! Unbeatable - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unbeatable::{Cli, Command, PlayConfig, PlaySession, analyze, demo, verify};
use unbeatable_tictactoe::Player;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    debug!(command = ?cli.command, "Starting unbeatable");

    match cli.command {
        Command::Play {
            human,
            first,
            no_guide,
        } => {
            let mut config = PlayConfig::load_or_default(&cli.config)?;
            if let Some(human) = human {
                config = config.with_human_mark(human.into());
            }
            if let Some(first) = first {
                config = config.with_first(first);
            }
            if no_guide {
                config = config.with_show_guide(false);
            }

            let tally = PlaySession::new(config, io::stdin().lock(), io::stdout().lock()).run()?;
            info!(?tally, "Play session finished");
            Ok(())
        }
        Command::Analyze {
            board,
            engine,
            json,
        } => {
            let report = analyze::report(&board, engine.map(Player::from))?;
            if json {
                analyze::write_json(&report, io::stdout().lock())
            } else {
                analyze::write_table(&report, io::stdout().lock())
            }
        }
        Command::Verify => {
            for engine in [Player::O, Player::X] {
                let report = verify::run(engine)?;
                verify::write_summary(&report, io::stdout().lock())?;
                println!();
                if report.losses() > 0 {
                    bail!("engine playing {} lost {} game(s)", engine, report.losses());
                }
            }
            Ok(())
        }
        Command::Demo => demo::run(io::stdout().lock()),
    }
}
