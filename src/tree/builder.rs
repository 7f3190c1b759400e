//! Exhaustive tree construction with backward induction.
//!
//! The builder expands the empty board depth-first, one child per vacant
//! square in ascending order. Each child is classified as soon as it is
//! allocated, expanded recursively, and then folded into its parent while
//! the recursion unwinds, so every internal position ends up holding its
//! minimax value and best move after a single pass.
//!
//! No pruning and no transposition merging: every move order is its own
//! position. Recursion depth is bounded by the terminal round (9 or 4).

use std::time::Instant;

use tracing::{debug, trace};

use super::node::PositionId;
use super::stats::BuildStats;
use super::store::PositionStore;
use crate::core::Player;
use crate::rules::{RuleSet, Verdict};

/// Build the complete game tree for a rule set.
///
/// Deterministic: the same rule set always yields the same positions under
/// the same handles.
///
/// ```
/// use tictactoe_minimax::rules::RuleSet;
/// use tictactoe_minimax::tree::build_tree;
///
/// let (store, root) = build_tree(RuleSet::simple());
/// assert_eq!(store.len(), 41);
/// assert_eq!(store.value(root), -1);
/// ```
pub fn build_tree(rules: RuleSet) -> (PositionStore, PositionId) {
    let mut builder = TreeBuilder::new(rules);
    let root = builder.build();
    (builder.into_store(), root)
}

/// Depth-first tree builder.
///
/// Owns the store while building; hand it off with `into_store` once
/// `build` returns.
pub struct TreeBuilder {
    /// The store being populated.
    store: PositionStore,

    /// Build statistics.
    stats: BuildStats,
}

impl TreeBuilder {
    /// Create a builder for a rule set.
    ///
    /// Panics if the rule set's line table does not fit its board.
    pub fn new(rules: RuleSet) -> Self {
        rules.assert_well_formed();
        Self {
            store: PositionStore::new(rules),
            stats: BuildStats::default(),
        }
    }

    /// Expand the whole tree from the empty board.
    ///
    /// Calling this again discards the previous tree and rebuilds it.
    pub fn build(&mut self) -> PositionId {
        let start = Instant::now();
        let rules = *self.store.rules();
        self.stats.reset();
        self.store = PositionStore::new(rules);

        debug!(variant = %rules.variant(), "building game tree");

        let root = self.store.root();
        let verdict = rules.classify(self.store.board(root), 0);
        self.store.get_mut(root).settle(verdict);
        if verdict.is_terminal() {
            self.stats.terminals += 1;
        }

        self.expand(root);

        self.stats.positions = self.store.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            variant = %rules.variant(),
            positions = self.stats.positions,
            terminals = self.stats.terminals,
            root_value = self.store.value(root),
            time_us = self.stats.time_us,
            "game tree built"
        );

        root
    }

    /// Expand one position and fold its children into it.
    fn expand(&mut self, id: PositionId) {
        let parent = self.store.get(id);
        if parent.is_terminal() {
            return;
        }

        let round = parent.round + 1;
        let mark = Player::for_round(round);
        let board = parent.board.clone();
        let rules = *self.store.rules();

        for square in board.vacant_squares() {
            let child_board = board.with_mark(square, mark);
            let verdict = rules.classify(&child_board, round);

            let child = self.store.alloc(id, round, square, child_board);
            self.store.get_mut(id).children.push(child);
            self.store.get_mut(child).settle(verdict);
            self.stats.max_round = self.stats.max_round.max(round);

            if verdict.is_terminal() {
                self.stats.terminals += 1;
                trace!(%child, round, square, ?verdict, "terminal position");
            }

            self.expand(child);

            let child_value = self.store.value(child);
            self.store.get_mut(id).fold_child(child, child_value);
        }

        // A full board that no line and no round cap ended.
        if self.store.children(id).is_empty() {
            self.store.get_mut(id).settle(Verdict::Stalemate);
            self.stats.terminals += 1;
        }
    }

    /// The store built so far.
    #[must_use]
    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    /// Statistics from the last build.
    #[must_use]
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Take the built store, consuming the builder.
    #[must_use]
    pub fn into_store(self) -> PositionStore {
        self.store
    }
}
