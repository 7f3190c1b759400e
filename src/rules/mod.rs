//! Game variants and terminal-state classification.
//!
//! - `RuleSet`: board size, winning lines, terminal round
//! - `Verdict`: classifier result for a freshly created position
//!
//! The tree builder calls into the rule set but never interprets winning
//! lines itself.

pub mod classifier;
pub mod ruleset;

pub use classifier::Verdict;
pub use ruleset::{RuleSet, Variant};
