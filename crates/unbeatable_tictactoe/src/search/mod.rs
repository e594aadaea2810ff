//! Adversarial search: the minimax core and the root move selector.

pub mod minimax;
pub mod selector;

pub use minimax::{
    ALPHA_MIN, BETA_MAX, Pruning, Score, SearchStats, Searcher, WIN_SCORE, minimax,
};
pub use selector::{Analysis, MoveEvaluation, Verdict, analyze, best_move};
