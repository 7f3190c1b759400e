//! Whole-tree invariant checks.
//!
//! Recomputes every structural and minimax property of a built store and
//! reports the first violation. Used by the tests and by the CLI's
//! `--validate` flag.

use super::node::{Position, PositionId};
use super::store::PositionStore;
use crate::error::{Error, Result};
use crate::rules::Verdict;

fn violation(id: PositionId, reason: impl Into<String>) -> Error {
    Error::Invariant {
        id,
        reason: reason.into(),
    }
}

/// Check every position of a built tree.
///
/// - parent linkage, round increments, single-square board deltas
/// - stored verdicts agree with the rule set's classifier
/// - terminal iff childless
/// - terminal values follow the verdict
/// - internal values and best moves match a fresh fold over the children
pub fn validate(store: &PositionStore) -> Result<()> {
    let rules = store.rules();

    for (id, position) in store.iter() {
        if position.board.len() != rules.total_squares() {
            return Err(violation(id, "board size does not match the rule set"));
        }

        if id == store.root() {
            if !position.parent.is_none() || position.round != 0 {
                return Err(violation(id, "root must have no parent and round 0"));
            }
        } else {
            check_linkage(store, id, position)?;
        }

        if position.board.occupied_count() != usize::from(position.round) {
            return Err(violation(id, "occupied squares do not match the round"));
        }

        check_verdict(store, id, position)?;

        if position.is_terminal() != position.children.is_empty() {
            return Err(violation(id, "terminal verdict and child list disagree"));
        }

        if position.is_terminal() {
            if position.verdict.terminal_value() != Some(position.value) {
                return Err(violation(id, "terminal value does not follow the verdict"));
            }
            if !position.best_move.is_none() {
                return Err(violation(id, "terminal position has a best move"));
            }
        } else {
            check_fold(store, id, position)?;
        }
    }

    Ok(())
}

fn check_linkage(store: &PositionStore, id: PositionId, position: &Position) -> Result<()> {
    if position.parent.raw() as usize >= store.len() || position.parent >= id {
        return Err(violation(id, "parent handle is not an earlier allocation"));
    }
    let parent = store.get(position.parent);

    if !parent.children.contains(&id) {
        return Err(violation(id, "parent does not list this position as a child"));
    }
    if position.round != parent.round + 1 {
        return Err(violation(id, "round is not parent round + 1"));
    }

    let Some(square) = position.square.map(usize::from) else {
        return Err(violation(id, "non-root position has no move square"));
    };
    if !parent.board.is_vacant(square) || position.board.get(square) != Some(position.mover()) {
        return Err(violation(id, format!("square {square} was not a fresh mark by the mover")));
    }
    let changed = (0..position.board.len())
        .filter(|&s| position.board.get(s) != parent.board.get(s))
        .count();
    if changed != 1 {
        return Err(violation(id, format!("board differs from parent in {changed} squares")));
    }

    Ok(())
}

fn check_verdict(store: &PositionStore, id: PositionId, position: &Position) -> Result<()> {
    let classified = store.rules().classify(&position.board, position.round);
    let stored = store.verdict(id);
    if stored == classified {
        return Ok(());
    }

    // Full boards the classifier leaves open are settled as stalemates after expansion.
    let settled_full_board = classified == Verdict::InProgress
        && stored == Verdict::Stalemate
        && position.board.vacant_squares().next().is_none();
    if settled_full_board {
        return Ok(());
    }

    Err(violation(
        id,
        format!("stored verdict {stored:?} but the classifier says {classified:?}"),
    ))
}

fn check_fold(store: &PositionStore, id: PositionId, position: &Position) -> Result<()> {
    let mut refold = Position::new(position.parent, position.round, position.square, position.board.clone());
    for &child in &position.children {
        refold.fold_child(child, store.value(child));
    }

    if refold.value != position.value || refold.best_move != position.best_move {
        return Err(violation(
            id,
            format!(
                "stored value {} / best {} but children fold to {} / {}",
                position.value, position.best_move, refold.value, refold.best_move
            ),
        ));
    }
    if position.value != -store.value(position.best_move) {
        return Err(violation(id, "value is not the negated value of the best child"));
    }

    Ok(())
}
