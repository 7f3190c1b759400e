//! Terminal-state classification.
//!
//! A freshly created position is classified exactly once, from its board
//! and its round. The verdict is relative to the player **to move** at that
//! position, which is also the perspective of the position's `value`.

use serde::{Deserialize, Serialize};

use super::ruleset::{RuleSet, Variant};
use crate::core::{Board, Player};

/// Classifier result, relative to the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No complete line and the board is not exhausted.
    InProgress,
    /// The player to move has won.
    Victory,
    /// The player to move has lost.
    Defeat,
    /// No complete line at the terminal round.
    Stalemate,
}

impl Verdict {
    /// Check if the game is over.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Value of a terminal position; `None` while in progress.
    #[must_use]
    pub const fn terminal_value(self) -> Option<i8> {
        match self {
            Verdict::InProgress => None,
            Verdict::Victory => Some(1),
            Verdict::Defeat => Some(-1),
            Verdict::Stalemate => Some(0),
        }
    }
}

impl RuleSet {
    /// First complete line in declaration order, with the mark that fills it.
    #[must_use]
    pub fn completed_line(&self, board: &Board) -> Option<(usize, Player)> {
        self.winning_lines()
            .iter()
            .enumerate()
            .find_map(|(index, line)| {
                let mark = board.get(line[0])?;
                line[1..]
                    .iter()
                    .all(|&square| board.get(square) == Some(mark))
                    .then_some((index, mark))
            })
    }

    /// Classify a position of the given round.
    ///
    /// The line check always takes precedence over the stalemate check.
    ///
    /// Classic: a completed line made by the mark just placed is a defeat
    /// for the player to move.
    ///
    /// Simple: a completed pair of `X` marks is a victory for the player to
    /// move and any other pair a defeat, whoever moved. This asymmetry is
    /// part of the variant's scoring and is kept as is.
    #[must_use]
    pub fn classify(&self, board: &Board, round: u8) -> Verdict {
        if let Some((_, mark)) = self.completed_line(board) {
            return match self.variant() {
                Variant::Classic => {
                    if mark.encoding() == Player::for_round(round).encoding() {
                        Verdict::Defeat
                    } else {
                        Verdict::Victory
                    }
                }
                Variant::Simple => {
                    if mark == Player::X {
                        Verdict::Victory
                    } else {
                        Verdict::Defeat
                    }
                }
            };
        }

        if round >= self.terminal_round() {
            Verdict::Stalemate
        } else {
            Verdict::InProgress
        }
    }
}
