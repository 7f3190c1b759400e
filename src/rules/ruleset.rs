//! Rule sets for the supported variants.
//!
//! A `RuleSet` fixes the board size, the winning-line geometry, and the
//! round at which a full board with no line becomes a stalemate. Only the
//! two variants below exist; there is no way to build a custom one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Rows, columns, then diagonals of the 3×3 board.
const CLASSIC_LINES: &[&[usize]] = &[
    &[0, 1, 2],
    &[3, 4, 5],
    &[6, 7, 8],
    &[0, 3, 6],
    &[1, 4, 7],
    &[2, 5, 8],
    &[0, 4, 8],
    &[2, 4, 6],
];

/// Every pair of squares on the 2×2 board.
const SIMPLE_LINES: &[&[usize]] = &[&[0, 1], &[0, 2], &[0, 3], &[1, 2], &[1, 3], &[2, 3]];

/// Variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 3×3 board, three in a row.
    Classic,
    /// 2×2 board, two in a row.
    Simple,
}

impl Variant {
    /// Lowercase tag as accepted by `FromStr`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Simple => "simple",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "simple" => Ok(Variant::Simple),
            _ => Err(Error::UnknownVariant { tag: s.to_string() }),
        }
    }
}

/// Immutable description of a game variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    variant: Variant,
    total_squares: usize,
    row_width: usize,
    terminal_round: u8,
    winning_lines: &'static [&'static [usize]],
}

impl RuleSet {
    /// Look up the rule set for a variant.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                variant,
                total_squares: 9,
                row_width: 3,
                terminal_round: 9,
                winning_lines: CLASSIC_LINES,
            },
            Variant::Simple => Self {
                variant,
                total_squares: 4,
                row_width: 2,
                terminal_round: 4,
                winning_lines: SIMPLE_LINES,
            },
        }
    }

    /// The 3×3 rule set.
    #[must_use]
    pub const fn classic() -> Self {
        Self::new(Variant::Classic)
    }

    /// The 2×2 rule set.
    #[must_use]
    pub const fn simple() -> Self {
        Self::new(Variant::Simple)
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of squares on the board.
    #[must_use]
    pub const fn total_squares(&self) -> usize {
        self.total_squares
    }

    /// Cells per rendered row.
    #[must_use]
    pub const fn row_width(&self) -> usize {
        self.row_width
    }

    /// Round at which a board with no complete line is a stalemate.
    #[must_use]
    pub const fn terminal_round(&self) -> u8 {
        self.terminal_round
    }

    /// Winning lines in declaration order. The order is the scan order of
    /// the classifier.
    #[must_use]
    pub const fn winning_lines(&self) -> &'static [&'static [usize]] {
        self.winning_lines
    }

    /// Panic if the line table does not fit the board.
    pub fn assert_well_formed(&self) {
        let arity = match self.variant {
            Variant::Classic => 3,
            Variant::Simple => 2,
        };
        assert!(
            !self.winning_lines.is_empty(),
            "{} rule set has no winning lines",
            self.variant
        );
        for line in self.winning_lines {
            assert_eq!(
                line.len(),
                arity,
                "{} rule set has a line of length {}",
                self.variant,
                line.len()
            );
            assert!(
                line.iter().all(|&square| square < self.total_squares),
                "{} rule set has a line {line:?} outside a {}-square board",
                self.variant,
                self.total_squares
            );
        }
    }
}
