//! Arena-based position store.
//!
//! Uses a flat `Vec<Position>` with index-based references for
//! cache-friendliness and trivially shareable read-only access once the
//! tree is built.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::node::{Outcome, Position, PositionId};
use super::stats::TreeStats;
use crate::core::Board;
use crate::rules::{RuleSet, Verdict};

/// Append-only arena of game-tree positions.
///
/// Positions are referenced by `PositionId` indices, assigned in allocation
/// order. Nothing is ever removed.
#[derive(Clone, Debug)]
pub struct PositionStore {
    /// All positions in the tree.
    positions: Vec<Position>,

    /// The root position ID (always 0).
    root: PositionId,

    /// Rule set shared by every position.
    rules: RuleSet,
}

impl PositionStore {
    /// Create a store holding only the root position.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_capacity(rules, 1024)
    }

    /// Create a store with custom initial capacity.
    pub fn with_capacity(rules: RuleSet, capacity: usize) -> Self {
        let mut positions = Vec::with_capacity(capacity.max(1));
        positions.push(Position::root(rules.total_squares()));
        Self {
            positions,
            root: PositionId::new(0),
            rules,
        }
    }

    /// Get the root position ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> PositionId {
        self.root
    }

    /// The rule set this tree was built for.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Get a position by ID.
    ///
    /// Panics on an unallocated handle.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PositionId) -> &Position {
        match self.positions.get(id.0 as usize) {
            Some(position) => position,
            None => panic!("{id} is not allocated (store holds {})", self.positions.len()),
        }
    }

    /// Get a mutable position by ID.
    ///
    /// Panics on an unallocated handle.
    #[inline]
    pub fn get_mut(&mut self, id: PositionId) -> &mut Position {
        let len = self.positions.len();
        match self.positions.get_mut(id.0 as usize) {
            Some(position) => position,
            None => panic!("{id} is not allocated (store holds {len})"),
        }
    }

    /// Allocate a new unclassified position, returning its ID.
    pub fn alloc(&mut self, parent: PositionId, round: u8, square: usize, board: Board) -> PositionId {
        let id = PositionId::new(self.positions.len() as u32);
        assert!(square < board.len(), "square {square} out of range");
        trace!(%id, %parent, round, square, "allocated position");
        self.positions.push(Position::new(parent, round, Some(square as u8), board));
        id
    }

    /// Number of positions in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Value for the player to move at `id`.
    #[must_use]
    pub fn value(&self, id: PositionId) -> i8 {
        self.get(id).value
    }

    /// Best child of `id`, or `None` at terminal positions.
    #[must_use]
    pub fn best_move(&self, id: PositionId) -> Option<PositionId> {
        self.get(id).best_move.get()
    }

    /// Immediate successors of `id` in ascending square order.
    #[must_use]
    pub fn children(&self, id: PositionId) -> &[PositionId] {
        &self.get(id).children
    }

    /// Board snapshot at `id`.
    #[must_use]
    pub fn board(&self, id: PositionId) -> &Board {
        &self.get(id).board
    }

    /// Absolute outcome at `id`.
    #[must_use]
    pub fn outcome(&self, id: PositionId) -> Outcome {
        self.get(id).outcome()
    }

    /// Classifier verdict at `id`.
    #[must_use]
    pub fn verdict(&self, id: PositionId) -> Verdict {
        self.get(id).verdict
    }

    /// Follow best moves from `from` to a terminal position.
    ///
    /// The returned path starts with `from` itself.
    #[must_use]
    pub fn principal_line(&self, from: PositionId) -> Vec<PositionId> {
        let mut line = vec![from];
        let mut current = from;
        while let Some(next) = self.best_move(current) {
            line.push(next);
            current = next;
        }
        line
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.positions.len(),
            ..TreeStats::default()
        };
        let mut boards = FxHashSet::default();
        let mut total_children = 0usize;

        for position in &self.positions {
            stats.max_round = stats.max_round.max(position.round);
            total_children += position.children.len();
            boards.insert(&position.board);

            match position.outcome() {
                Outcome::InProgress => {}
                Outcome::Won(player) => {
                    stats.terminal_count += 1;
                    stats.record_win(player);
                }
                Outcome::Stalemate => {
                    stats.terminal_count += 1;
                    stats.stalemates += 1;
                }
            }
        }

        stats.distinct_boards = boards.len();
        stats.total_children = total_children;
        stats
    }

    /// Iterate over all positions.
    pub fn iter(&self) -> impl Iterator<Item = (PositionId, &Position)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| (PositionId::new(i as u32), p))
    }
}
