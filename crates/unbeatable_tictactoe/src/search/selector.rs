//! Root move selection.
//!
//! Every legal move is scored by the searcher, then ranked by raw score,
//! positional weight and finally board index (lowest first).

use super::minimax::{ALPHA_MIN, BETA_MAX, Score, SearchStats, Searcher, WIN_SCORE};
use crate::rules::available_moves;
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic outcome of a root move under perfect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The engine forces a win; `plies` counts the root move itself.
    Win {
        /// Half-moves until the winning mark, root move included.
        plies: u32,
    },
    /// The opponent forces a win.
    Loss {
        /// Half-moves until the opponent's winning mark, root move included.
        plies: u32,
    },
    /// Neither side can force a win.
    Draw,
}

impl Verdict {
    /// Interprets the score of a root move searched from depth zero.
    pub fn from_score(score: Score) -> Self {
        match score {
            s if s > 0 => Verdict::Win {
                plies: (WIN_SCORE - s + 1) as u32,
            },
            s if s < 0 => Verdict::Loss {
                plies: (WIN_SCORE + s + 1) as u32,
            },
            _ => Verdict::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win { plies } => write!(f, "win in {}", plies),
            Verdict::Loss { plies } => write!(f, "loss in {}", plies),
            Verdict::Draw => write!(f, "draw"),
        }
    }
}

/// Minimax score of one candidate root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    /// Candidate position.
    pub position: Position,
    /// Raw minimax score after the engine plays `position`.
    pub score: Score,
}

impl MoveEvaluation {
    /// Positional tie-break weight of the candidate.
    pub fn weight(&self) -> u8 {
        self.position.weight()
    }

    /// Outcome implied by the raw score.
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score)
    }

    /// Ordering key: raw score first, positional weight second.
    ///
    /// Board index is the third key, applied by keeping the earliest of
    /// equal keys during ascending enumeration.
    fn rank(&self) -> (Score, u8) {
        (self.score, self.weight())
    }
}

/// Scores of every legal root move plus the selected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The side the engine played.
    pub engine: Player,
    /// One entry per empty square, ascending index order.
    pub evaluations: Vec<MoveEvaluation>,
    /// The selected move, `None` when the board has no empty square.
    pub best: Option<Position>,
    /// Search counters summed over all root moves.
    pub stats: SearchStats,
}

impl Analysis {
    /// Evaluation of the selected move.
    pub fn best_evaluation(&self) -> Option<&MoveEvaluation> {
        let best = self.best?;
        self.evaluations.iter().find(|e| e.position == best)
    }
}

/// Scores every legal move for `engine` and picks the best one.
///
/// The caller's board is never touched: the search runs on a private
/// copy that is mutated and restored move by move.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn analyze(board: &Board, engine: Player) -> Analysis {
    let mut scratch = *board;
    let mut searcher = Searcher::new(engine);
    let mut evaluations = Vec::new();
    let mut best: Option<MoveEvaluation> = None;

    for position in available_moves(&scratch) {
        scratch.place(position, engine);
        let score = searcher.search(&mut scratch, 0, false, ALPHA_MIN, BETA_MAX);
        scratch.clear(position);

        let evaluation = MoveEvaluation { position, score };
        debug!(position = %position, score, "Scored root move");

        if best.is_none_or(|b| evaluation.rank() > b.rank()) {
            best = Some(evaluation);
        }
        evaluations.push(evaluation);
    }

    let stats = searcher.stats();
    debug!(
        best = ?best.map(|b| b.position),
        score = ?best.map(|b| b.score),
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    Analysis {
        engine,
        evaluations,
        best: best.map(|b| b.position),
        stats,
    }
}

/// Returns the optimal move for `engine`, or `None` when the board is full.
///
/// The opponent is `engine.opponent()`. Committing the move to the board
/// is left to the caller. Identical boards always yield identical moves.
///
/// Boards with two completed lines are accepted; they are scored as an
/// engine win because the engine's line is tested first. The result is
/// deterministic but has no game-theoretic meaning.
#[instrument(skip(board))]
pub fn best_move(board: &Board, engine: Player) -> Option<Position> {
    analyze(board, engine).best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_score() {
        assert_eq!(Verdict::from_score(10), Verdict::Win { plies: 1 });
        assert_eq!(Verdict::from_score(8), Verdict::Win { plies: 3 });
        assert_eq!(Verdict::from_score(-9), Verdict::Loss { plies: 2 });
        assert_eq!(Verdict::from_score(-7), Verdict::Loss { plies: 4 });
        assert_eq!(Verdict::from_score(0), Verdict::Draw);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Win { plies: 1 }.to_string(), "win in 1");
        assert_eq!(Verdict::Draw.to_string(), "draw");
    }

    #[test]
    fn test_analysis_lists_every_empty_square() {
        let board: Board = "X...O....".parse().unwrap();
        let analysis = analyze(&board, Player::X);
        let positions: Vec<usize> = analysis
            .evaluations
            .iter()
            .map(|e| e.position.to_index())
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 5, 6, 7, 8]);
        assert!(analysis.stats.nodes > 0);
    }

    #[test]
    fn test_immediate_win_beats_block() {
        // O O . / . . . / X X .  with O to move: winning beats blocking 8.
        let board: Board = "OO....XX.".parse().unwrap();
        let analysis = analyze(&board, Player::O);
        assert_eq!(analysis.best, Some(Position::TopRight));
        let best = analysis.best_evaluation().unwrap();
        assert_eq!(best.verdict(), Verdict::Win { plies: 1 });
    }

    #[test]
    fn test_equal_scores_prefer_higher_weight() {
        let analysis = analyze(&Board::new(), Player::X);
        assert!(analysis.evaluations.iter().all(|e| e.score == 0));
        assert_eq!(analysis.best, Some(Position::Center));
    }

    #[test]
    fn test_equal_score_and_weight_prefer_lowest_index() {
        // X in the center; every corner reply draws, every edge reply loses.
        let board: Board = "....X....".parse().unwrap();
        let analysis = analyze(&board, Player::O);
        assert_eq!(analysis.best, Some(Position::TopLeft));
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let analysis = analyze(&board, Player::O);
        assert!(analysis.evaluations.is_empty());
        assert_eq!(analysis.best, None);
        assert_eq!(best_move(&board, Player::O), None);
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let board: Board = "X.O......".parse().unwrap();
        let before = board;
        let _ = best_move(&board, Player::X);
        assert_eq!(board, before);
    }
}
