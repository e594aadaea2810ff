//! Guided demonstration of the engine.

use anyhow::Result;
use std::io::Write;
use unbeatable_tictactoe::search::{ALPHA_MIN, BETA_MAX};
use unbeatable_tictactoe::{Board, Game, Player, Position, Pruning, Searcher, analyze};

/// Plays a short scripted exchange and compares pruned and full-width search.
pub fn run(mut out: impl Write) -> Result<()> {
    writeln!(out, "=== TIC-TAC-TOE ENGINE DEMONSTRATION ===\n")?;

    let engine = Player::O;
    let mut game = Game::new(engine);

    writeln!(out, "1. Starting with an empty board:\n\n{}\n", game.board())?;

    let opening = analyze(game.board(), engine);
    game.engine_move()?;
    writeln!(
        out,
        "2. The engine opens ({} nodes searched):\n\n{}\n",
        opening.stats.nodes,
        game.board()
    )?;

    game.make_move(Position::TopLeft)?;
    writeln!(out, "3. A human reply at position 1:\n\n{}\n", game.board())?;

    let reply = analyze(game.board(), engine);
    game.engine_move()?;
    writeln!(
        out,
        "4. The engine responds ({} nodes searched):\n\n{}\n",
        reply.stats.nodes,
        game.board()
    )?;

    writeln!(out, "5. How the engine scored its reply:")?;
    for evaluation in &reply.evaluations {
        writeln!(
            out,
            "   position {}: score {:>3}, {}",
            evaluation.position.number(),
            evaluation.score,
            evaluation.verdict()
        )?;
    }

    let mut board = Board::new();
    let mut pruned = Searcher::new(Player::X);
    let mut full = Searcher::new(Player::X).with_pruning(Pruning::Disabled);
    let pruned_score = pruned.search(&mut board, 0, true, ALPHA_MIN, BETA_MAX);
    let full_score = full.search(&mut board, 0, true, ALPHA_MIN, BETA_MAX);

    writeln!(out, "\n6. Searching the empty board:")?;
    writeln!(
        out,
        "   full-width minimax: {} nodes, score {}",
        full.stats().nodes,
        full_score
    )?;
    writeln!(
        out,
        "   alpha-beta:         {} nodes, {} cutoffs, score {}",
        pruned.stats().nodes,
        pruned.stats().cutoffs,
        pruned_score
    )?;
    writeln!(
        out,
        "   Perfect play from the empty board is a draw; pruning changes the cost, not the score."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_runs() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("6. Searching the empty board"));
        assert!(text.contains("score 0"));
    }
}
