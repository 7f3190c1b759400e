//! The game tree: positions, the arena that holds them, and the builder.
//!
//! ## Overview
//!
//! - **Arena storage**: every position lives in one `PositionStore`,
//!   addressed by a stable `PositionId`
//! - **Backward induction**: `TreeBuilder` expands the empty board
//!   depth-first and folds each child's value into its parent on the way
//!   back up
//! - **Read-only afterwards**: the finished store can be shared freely
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::rules::RuleSet;
//! use tictactoe_minimax::tree::{build_tree, Outcome};
//!
//! let (store, root) = build_tree(RuleSet::classic());
//!
//! // Perfect play from both sides is a draw.
//! assert_eq!(store.value(root), 0);
//! let line = store.principal_line(root);
//! let last = *line.last().unwrap();
//! assert_eq!(store.outcome(last), Outcome::Stalemate);
//! ```

pub mod builder;
pub mod node;
pub mod stats;
pub mod store;
pub mod validate;

pub use builder::{build_tree, TreeBuilder};
pub use node::{Outcome, Position, PositionId};
pub use stats::{BuildStats, TreeStats};
pub use store::PositionStore;
pub use validate::validate;
