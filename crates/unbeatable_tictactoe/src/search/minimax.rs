//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The searcher mutates one board in place: every candidate mark is
//! placed, searched and cleared again before the next candidate is
//! tried, so the board leaves each call exactly as it entered.

use crate::rules::{available_moves, is_full, is_winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Minimax score. Positive favours the engine, negative the opponent.
pub type Score = i32;

/// Score of a win found at depth zero. Each extra ply costs one point.
pub const WIN_SCORE: Score = 10;

/// Lower bound of the search window (minus infinity).
pub const ALPHA_MIN: Score = Score::MIN;

/// Upper bound of the search window (plus infinity).
pub const BETA_MAX: Score = Score::MAX;

/// Whether the search may cut off branches once `beta <= alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Alpha-beta cutoffs are applied.
    #[default]
    Enabled,
    /// Full-width minimax. Used as a reference for the pruned search.
    Disabled,
}

/// Which player the search maximizes for and which it minimizes for.
#[derive(Debug, Clone, Copy)]
struct Sides {
    engine: Player,
    opponent: Player,
}

impl Sides {
    fn new(engine: Player) -> Self {
        Self {
            engine,
            opponent: engine.opponent(),
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Times a node stopped enumerating moves early.
    pub cutoffs: u64,
}

/// Recursive game-tree searcher.
///
/// A searcher holds nothing but its configuration and counters; it is
/// created per query and may be dropped afterwards.
#[derive(Debug, Clone)]
pub struct Searcher {
    sides: Sides,
    pruning: Pruning,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a pruning searcher that maximizes for `engine`.
    pub fn new(engine: Player) -> Self {
        Self {
            sides: Sides::new(engine),
            pruning: Pruning::default(),
            stats: SearchStats::default(),
        }
    }

    /// Selects the cutoff rule.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores `board` under optimal play by both sides.
    ///
    /// Terminal positions are tested first, engine win before opponent
    /// win: an engine win scores `10 - depth`, an opponent win
    /// `depth - 10`, a full board `0`. Otherwise the player to move
    /// (the engine when `maximizing`) tries every empty square in
    /// ascending order.
    ///
    /// Top-level callers pass `ALPHA_MIN` and `BETA_MAX`. The board is
    /// restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if is_winner(board, self.sides.engine) {
            return WIN_SCORE - depth as Score;
        }
        if is_winner(board, self.sides.opponent) {
            return depth as Score - WIN_SCORE;
        }
        if is_full(board) {
            return 0;
        }

        let mover = if maximizing {
            self.sides.engine
        } else {
            self.sides.opponent
        };
        let mut best = if maximizing { ALPHA_MIN } else { BETA_MAX };

        for pos in available_moves(board) {
            board.place(pos, mover);
            let score = self.search(board, depth + 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.pruning == Pruning::Enabled && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Scores `board` for `engine` with a full window from depth zero.
pub fn minimax(board: &mut Board, engine: Player, maximizing: bool) -> Score {
    Searcher::new(engine).search(board, 0, maximizing, ALPHA_MIN, BETA_MAX)
}
