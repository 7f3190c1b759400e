//! Single-game playouts over a built tree.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::policy::{MovePolicy, OptimalPolicy};
use crate::core::{Player, PlayoutRng};
use crate::tree::{Outcome, PositionId, PositionStore};

/// One game walked through the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTrace {
    /// Visited positions, starting position first.
    pub path: Vec<PositionId>,

    /// Outcome at the last position.
    pub outcome: Outcome,

    /// Value of the last position for the player to move there.
    pub final_value: i8,
}

impl GameTrace {
    /// Final position, if the trace visited any.
    #[must_use]
    pub fn last(&self) -> Option<PositionId> {
        self.path.last().copied()
    }

    /// Number of moves played.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Squares played, in order.
    #[must_use]
    pub fn squares(&self, store: &PositionStore) -> Vec<usize> {
        self.path
            .iter()
            .skip(1)
            .filter_map(|&id| store.get(id).square.map(usize::from))
            .collect()
    }

    /// Result for `player`: +1 win, 0 stalemate or unfinished, -1 loss.
    #[must_use]
    pub fn score_for(&self, player: Player) -> i8 {
        match self.outcome {
            Outcome::Won(winner) if winner == player => 1,
            Outcome::Won(_) => -1,
            Outcome::Stalemate | Outcome::InProgress => 0,
        }
    }
}

/// Play from `start` until a terminal position.
///
/// At each step the policy of the player to move picks the child.
pub fn play_game(
    store: &PositionStore,
    start: PositionId,
    x_policy: &dyn MovePolicy,
    o_policy: &dyn MovePolicy,
    rng: &mut PlayoutRng,
) -> GameTrace {
    let mut path = vec![start];
    let mut current = start;

    while !store.get(current).is_terminal() {
        let policy = match store.get(current).to_move() {
            Player::X => x_policy,
            Player::O => o_policy,
        };
        let Some(next) = policy.choose(store, current, rng) else {
            break;
        };
        trace!(from = %current, to = %next, "playout move");
        path.push(next);
        current = next;
    }

    GameTrace {
        path,
        outcome: store.outcome(current),
        final_value: store.value(current),
    }
}

/// Both sides follow the recorded best moves.
pub fn optimal_game(store: &PositionStore, start: PositionId) -> GameTrace {
    let mut rng = PlayoutRng::new(0);
    play_game(store, start, &OptimalPolicy, &OptimalPolicy, &mut rng)
}
