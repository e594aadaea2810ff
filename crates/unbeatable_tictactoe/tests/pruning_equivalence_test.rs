//! Alpha-beta pruning must not change any score.

use std::collections::HashSet;
use unbeatable_tictactoe::search::{ALPHA_MIN, BETA_MAX};
use unbeatable_tictactoe::{
    Board, Player, Pruning, Searcher, analyze, available_moves, check_winner, is_full,
};

/// Every position reachable by alternating play from the empty board, X first.
fn reachable_positions() -> HashSet<Board> {
    fn walk(board: &mut Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(*board) {
            return;
        }
        if check_winner(board).is_some() || is_full(board) {
            return;
        }
        for pos in available_moves(board) {
            board.place(pos, to_move);
            walk(board, to_move.opponent(), seen);
            board.clear(pos);
        }
    }

    let mut seen = HashSet::new();
    walk(&mut Board::new(), Player::X, &mut seen);
    seen
}

fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[test]
fn test_reachable_position_count() {
    // 5478 legal positions, terminal ones included.
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_pruned_scores_match_full_width_minimax() {
    for board in reachable_positions() {
        for engine in [Player::X, Player::O] {
            for maximizing in [true, false] {
                let mut scratch = board;

                let mut pruned = Searcher::new(engine);
                let mut full = Searcher::new(engine).with_pruning(Pruning::Disabled);

                let a = pruned.search(&mut scratch, 0, maximizing, ALPHA_MIN, BETA_MAX);
                assert_eq!(scratch, board, "pruned search left the board changed");
                let b = full.search(&mut scratch, 0, maximizing, ALPHA_MIN, BETA_MAX);
                assert_eq!(scratch, board, "full search left the board changed");

                assert_eq!(
                    a, b,
                    "score mismatch for engine {:?}, maximizing {} on\n{}",
                    engine, maximizing, board
                );
            }
        }
    }
}

#[test]
fn test_root_scores_match_full_width_minimax_opening_plies() {
    // Root move scores from the selector against an unpruned search of
    // the same child positions, for every position up to two plies deep.
    for board in reachable_positions().into_iter().filter(|b| b.filled() <= 2) {
        let engine = side_to_move(&board);
        let analysis = analyze(&board, engine);

        for evaluation in &analysis.evaluations {
            let mut child = board;
            child.place(evaluation.position, engine);
            let expected = Searcher::new(engine)
                .with_pruning(Pruning::Disabled)
                .search(&mut child, 0, false, ALPHA_MIN, BETA_MAX);
            assert_eq!(evaluation.score, expected);
        }
    }
}
