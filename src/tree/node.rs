//! Game-tree positions.
//!
//! Uses arena-based allocation with index references (PositionId) so the
//! finished tree is a flat, read-only vector.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Player};
use crate::rules::Verdict;

/// Index into the PositionStore arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u32);

impl PositionId {
    /// Sentinel value representing no position.
    pub const NONE: PositionId = PositionId(u32::MAX);

    /// Create a new position ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<PositionId> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "PositionId(NONE)")
        } else {
            write!(f, "PositionId({})", self.0)
        }
    }
}

/// Absolute game status of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    InProgress,
    /// The game is over and this player won.
    Won(Player),
    /// The game is over with no winner.
    Stalemate,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Check if `player` lost.
    #[must_use]
    pub fn is_loss_for(self, player: Player) -> bool {
        self == Outcome::Won(player.opponent())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "{player} wins"),
            Outcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// One node of the game tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Position {
    /// Parent position (NONE for root).
    pub parent: PositionId,

    /// Marks placed so far (root = 0).
    pub round: u8,

    /// Square filled by the move that produced this position (None for root).
    pub square: Option<u8>,

    /// Board snapshot.
    pub board: Board,

    /// Classifier result, set once right after creation.
    pub verdict: Verdict,

    /// Game value for the player to move: -1, 0 or +1.
    pub value: i8,

    /// Child realising `value` (NONE until folded, and at terminals).
    pub best_move: PositionId,

    /// Successors in ascending square order.
    /// SmallVec holds the widest branching factor (9) inline.
    pub children: SmallVec<[PositionId; 9]>,
}

impl Position {
    /// Create an unclassified position.
    pub fn new(parent: PositionId, round: u8, square: Option<u8>, board: Board) -> Self {
        Self {
            parent,
            round,
            square,
            board,
            verdict: Verdict::InProgress,
            value: 0,
            best_move: PositionId::NONE,
            children: SmallVec::new(),
        }
    }

    /// Create the root position on an empty board.
    pub fn root(squares: usize) -> Self {
        Self::new(PositionId::NONE, 0, None, Board::empty(squares))
    }

    /// Player whose mark produced this position.
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Player {
        Player::for_round(self.round)
    }

    /// Player who moves next from this position.
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.mover().opponent()
    }

    /// Is this a terminal game state?
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.verdict.is_terminal()
    }

    /// Absolute outcome derived from the verdict.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self.verdict {
            Verdict::InProgress => Outcome::InProgress,
            Verdict::Victory => Outcome::Won(self.to_move()),
            Verdict::Defeat => Outcome::Won(self.mover()),
            Verdict::Stalemate => Outcome::Stalemate,
        }
    }

    /// Record the classifier result. Terminal positions get their value here.
    pub fn settle(&mut self, verdict: Verdict) {
        self.verdict = verdict;
        if let Some(value) = verdict.terminal_value() {
            self.value = value;
        }
    }

    /// Fold one evaluated child into this position's value and best move.
    ///
    /// `child_value` is from the child's player-to-move perspective, so it
    /// is negated. The first child always becomes the incumbent; later
    /// children replace it only when strictly better, so ties keep the
    /// earliest child.
    pub fn fold_child(&mut self, child: PositionId, child_value: i8) {
        let candidate = -child_value;
        if self.best_move.is_none() || candidate > self.value {
            self.value = candidate;
            self.best_move = child;
        }
    }
}
