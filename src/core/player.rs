//! Player identification and move parity.
//!
//! ## Player
//!
//! The two sides of the game. `X` places the first mark (round 1), `O`
//! the second, and play alternates from there.
//!
//! ## Round parity
//!
//! A position's round is the number of marks already on the board. The
//! mark that produced a position of round `r` belongs to `X` when `r` is
//! odd and to `O` when `r` is even.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, on odd rounds.
    X,
    /// Moves second, on even rounds.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The player whose mark produced a position of the given round.
    ///
    /// For the root (round 0) this names the nominal previous mover `O`,
    /// so that `for_round(0).opponent()` is the first player to move.
    ///
    /// ```
    /// use tictactoe_minimax::core::Player;
    ///
    /// assert_eq!(Player::for_round(1), Player::X);
    /// assert_eq!(Player::for_round(2), Player::O);
    /// assert_eq!(Player::for_round(0).opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn for_round(round: u8) -> Self {
        if round % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Numeric mark encoding used by the scoring rules (`O = 1`, `X = 2`).
    #[must_use]
    pub const fn encoding(self) -> u8 {
        match self {
            Player::O => 1,
            Player::X => 2,
        }
    }

    /// Display glyph for this player's mark.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Player::O => '\u{03BF}',
            Player::X => '\u{00D7}',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(Error::UnknownPlayer { tag: s.to_string() }),
        }
    }
}
