//! Position analysis: every legal move with its minimax score.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;
use unbeatable_tictactoe::{Analysis, Board, GameStatus, Player, analyze, status};

/// Side to move on a board reached by alternating play with X first.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Analysis bundled with the position it describes, for JSON output.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The analyzed board.
    pub board: Board,
    /// Status of the board before any move.
    pub status: GameStatus,
    /// Per-move scores and the selection.
    pub analysis: Analysis,
}

/// Parses `board`, analyzes it for `engine` (default: side to move) and
/// builds a report.
#[instrument]
pub fn report(board: &str, engine: Option<Player>) -> Result<Report> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let engine = engine.unwrap_or_else(|| side_to_move(&board));

    Ok(Report {
        board,
        status: status(&board),
        analysis: analyze(&board, engine),
    })
}

/// Writes a report as a human-readable table.
pub fn write_table(report: &Report, mut out: impl Write) -> Result<()> {
    let analysis = &report.analysis;

    writeln!(out, "{}\n", report.board)?;
    if report.status.is_over() {
        writeln!(out, "Note: position is already terminal ({})", report.status)?;
    }
    writeln!(out, "Engine plays {}", analysis.engine)?;

    if analysis.evaluations.is_empty() {
        writeln!(out, "No legal move: the board is full.")?;
        return Ok(());
    }

    writeln!(out, "{:<18}{:>7}{:>8}  Verdict", "Move", "Score", "Weight")?;
    for evaluation in &analysis.evaluations {
        let marker = if analysis.best == Some(evaluation.position) {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<18}{:>7}{:>8}  {}{}",
            format!("{} {}", evaluation.position.number(), evaluation.position),
            evaluation.score,
            evaluation.weight(),
            evaluation.verdict(),
            marker
        )?;
    }

    if let Some(best) = analysis.best_evaluation() {
        writeln!(
            out,
            "\nBest move: {} ({}), {}",
            best.position.number(),
            best.position,
            best.verdict()
        )?;
    }
    writeln!(
        out,
        "Searched {} nodes with {} cutoffs",
        analysis.stats.nodes, analysis.stats.cutoffs
    )?;
    Ok(())
}

/// Writes a report as pretty-printed JSON.
pub fn write_json(report: &Report, mut out: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}
