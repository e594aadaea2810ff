//! Self-play verification against a naive opponent.
//!
//! The opponent always takes the first empty square. The engine is
//! checked from every opening as second player, and once as first player.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument, warn};
use unbeatable_tictactoe::{Game, GameStatus, Player, Position, available_moves};

/// One verification game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// The opponent's opening move, `None` when the engine moved first.
    pub opening: Option<Position>,
    /// Final status.
    pub status: GameStatus,
    /// Every move in order.
    pub moves: Vec<Position>,
}

/// Outcome of the whole verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// The engine's mark.
    pub engine: Player,
    /// One entry per game played.
    pub scenarios: Vec<Scenario>,
}

impl VerifyReport {
    /// Games the engine won.
    pub fn wins(&self) -> usize {
        self.count(GameStatus::Won(self.engine))
    }

    /// Games the engine lost.
    pub fn losses(&self) -> usize {
        self.count(GameStatus::Won(self.engine.opponent()))
    }

    /// Drawn games.
    pub fn draws(&self) -> usize {
        self.count(GameStatus::Draw)
    }

    fn count(&self, status: GameStatus) -> usize {
        self.scenarios.iter().filter(|s| s.status == status).count()
    }
}

/// Plays one game; the engine answers every naive move with `best_move`.
fn play_scenario(engine: Player, opening: Option<Position>) -> Result<Scenario> {
    let opponent = engine.opponent();
    let mut game = match opening {
        Some(position) => {
            let mut game = Game::new(opponent);
            game.make_move(position)?;
            game
        }
        None => Game::new(engine),
    };

    while !game.status().is_over() {
        if game.to_move() == engine {
            if game.engine_move()?.is_none() {
                break;
            }
        } else {
            let Some(&position) = available_moves(game.board()).first() else {
                break;
            };
            game.make_move(position)?;
        }
    }

    Ok(Scenario {
        opening,
        status: game.status(),
        moves: game.history().iter().map(|m| m.position).collect(),
    })
}

/// Runs all scenarios for an engine playing `engine`.
#[instrument]
pub fn run(engine: Player) -> Result<VerifyReport> {
    let mut scenarios = Vec::new();
    for opening in Position::ALL {
        scenarios.push(play_scenario(engine, Some(opening))?);
    }
    scenarios.push(play_scenario(engine, None)?);

    let report = VerifyReport { engine, scenarios };
    if report.losses() > 0 {
        warn!(losses = report.losses(), "Engine lost a verification game");
    } else {
        info!(
            wins = report.wins(),
            draws = report.draws(),
            "Verification passed"
        );
    }
    Ok(report)
}

/// Writes a per-scenario summary.
pub fn write_summary(report: &VerifyReport, mut out: impl Write) -> Result<()> {
    writeln!(out, "=== VERIFYING ENGINE ({}) ===\n", report.engine)?;
    for scenario in &report.scenarios {
        let opening = match scenario.opening {
            Some(position) => format!("opponent opens {}", position.number()),
            None => "engine opens".to_string(),
        };
        let moves: Vec<String> = scenario
            .moves
            .iter()
            .map(|p| p.number().to_string())
            .collect();
        writeln!(
            out,
            "{:<18} {:<16} moves: {}",
            opening,
            scenario.status.to_string(),
            moves.join(" ")
        )?;
    }
    writeln!(out, "\nScenarios tested: {}", report.scenarios.len())?;
    writeln!(out, "Engine wins: {}", report.wins())?;
    writeln!(out, "Draws: {}", report.draws())?;
    writeln!(out, "Engine losses: {}", report.losses())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_never_loses_as_o() {
        let report = run(Player::O).unwrap();
        assert_eq!(report.scenarios.len(), 10);
        assert_eq!(report.losses(), 0);
        assert_eq!(report.wins() + report.draws(), 10);
    }

    #[test]
    fn test_engine_never_loses_as_x() {
        let report = run(Player::X).unwrap();
        assert_eq!(report.losses(), 0);
    }

    #[test]
    fn test_scenarios_start_with_opening() {
        let report = run(Player::O).unwrap();
        for (scenario, opening) in report.scenarios.iter().zip(Position::ALL) {
            assert_eq!(scenario.opening, Some(opening));
            assert_eq!(scenario.moves[0], opening);
        }
        assert_eq!(report.scenarios[9].moves[0], Position::Center);
    }

    #[test]
    fn test_summary_totals() {
        let report = run(Player::O).unwrap();
        let mut out = Vec::new();
        write_summary(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Scenarios tested: 10"));
        assert!(text.contains("Engine losses: 0"));
    }
}
