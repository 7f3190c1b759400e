//! Tree and build statistics for reporting.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Statistics collected while building the tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Positions allocated, root included.
    pub positions: usize,

    /// Positions settled as terminal.
    pub terminals: usize,

    /// Deepest round reached.
    pub max_round: u8,

    /// Total time spent building (microseconds).
    pub time_us: u64,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate positions generated per second.
    #[must_use]
    pub fn positions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.positions as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

/// Statistics about a built tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of positions.
    pub node_count: usize,

    /// Number of terminal positions (leaves).
    pub terminal_count: usize,

    /// Leaves won by X.
    pub x_wins: usize,

    /// Leaves won by O.
    pub o_wins: usize,

    /// Leaves with no winner.
    pub stalemates: usize,

    /// Deepest round in the tree.
    pub max_round: u8,

    /// Sum of child counts over all positions.
    pub total_children: usize,

    /// Distinct board snapshots. Lower than `node_count` because the same
    /// board is reached by several move orders.
    pub distinct_boards: usize,
}

impl TreeStats {
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Leaves won by `player`.
    #[must_use]
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Average children per internal position.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.terminal_count;
        if internal == 0 {
            0.0
        } else {
            self.total_children as f64 / internal as f64
        }
    }
}
