//! Move policies for walking a built tree.
//!
//! Policies are trait-based so the playout loop does not care who is
//! choosing:
//! - `OptimalPolicy`: follow the best move recorded by backward induction
//! - `UniformPolicy`: pick uniformly among the legal children

use crate::core::PlayoutRng;
use crate::tree::{PositionId, PositionStore};

/// Policy for choosing the next position from a non-terminal one.
pub trait MovePolicy: Send + Sync {
    /// Choose a child of `at`.
    ///
    /// Returns `None` if `at` has no children.
    fn choose(&self, store: &PositionStore, at: PositionId, rng: &mut PlayoutRng) -> Option<PositionId>;
}

/// Plays the recorded best move. Never touches the RNG.
#[derive(Clone, Debug, Default)]
pub struct OptimalPolicy;

impl MovePolicy for OptimalPolicy {
    fn choose(&self, store: &PositionStore, at: PositionId, _rng: &mut PlayoutRng) -> Option<PositionId> {
        store.best_move(at)
    }
}

/// Uniform random policy.
///
/// Selects uniformly from the legal children.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl MovePolicy for UniformPolicy {
    fn choose(&self, store: &PositionStore, at: PositionId, rng: &mut PlayoutRng) -> Option<PositionId> {
        rng.choose(store.children(at)).copied()
    }
}
