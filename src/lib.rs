//! # tictactoe-minimax
//!
//! Exhaustive game-tree solver for small tic-tac-toe variants.
//!
//! ## Design Principles
//!
//! 1. **Enumerate everything**: every legal move sequence becomes its own
//!    position. No pruning, no transposition merging.
//!
//! 2. **Backward induction**: each position's value and best move are
//!    folded in from its children while the depth-first build unwinds.
//!
//! 3. **Build once, read many**: the finished `PositionStore` is an
//!    immutable arena that playouts share without synchronisation.
//!
//! ## Modules
//!
//! - `core`: Players, boards, playout RNG
//! - `rules`: Rule sets and terminal-state classification
//! - `tree`: Position arena, builder, statistics, invariant checks
//! - `play`: Move policies, single-game traces, trial reports
//! - `render`: Text rendering of boards
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod play;
pub mod render;
pub mod rules;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{Board, Player, PlayoutRng};

pub use crate::error::{Error, Result};

pub use crate::rules::{RuleSet, Variant, Verdict};

pub use crate::tree::{
    build_tree, validate, BuildStats, Outcome, Position, PositionId, PositionStore, TreeBuilder,
    TreeStats,
};

pub use crate::play::{
    optimal_game, play_game, run_trials, GameTrace, MovePolicy, OptimalPolicy, TrialConfig,
    TrialReport, UniformPolicy,
};

pub use crate::render::{render_board, render_position};
