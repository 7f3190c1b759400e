//! Whole-tree properties of both rule sets.

use std::sync::OnceLock;

use tictactoe_minimax::core::{Board, Player};
use tictactoe_minimax::rules::{RuleSet, Verdict};
use tictactoe_minimax::tree::{build_tree, validate, Outcome, PositionId, PositionStore};

fn classic() -> &'static (PositionStore, PositionId) {
    static TREE: OnceLock<(PositionStore, PositionId)> = OnceLock::new();
    TREE.get_or_init(|| build_tree(RuleSet::classic()))
}

// =============================================================================
// Completeness
// =============================================================================

#[test]
fn test_classic_position_count() {
    let (store, _) = classic();

    let stats = store.stats();
    assert_eq!(stats.node_count, 549_946);
    assert_eq!(stats.terminal_count, 255_168);
    assert_eq!(stats.max_round, 9);
}

#[test]
fn test_classic_leaf_outcomes() {
    let (store, _) = classic();

    let stats = store.stats();
    assert_eq!(stats.x_wins, 131_184);
    assert_eq!(stats.o_wins, 77_904);
    assert_eq!(stats.stalemates, 46_080);
}

#[test]
fn test_distinct_boards() {
    let (store, _) = classic();
    assert_eq!(store.stats().distinct_boards, 5_478);

    let (simple, _) = build_tree(RuleSet::simple());
    assert_eq!(simple.stats().distinct_boards, 29);
}

#[test]
fn test_simple_position_count_bounded_by_orderings() {
    let (store, _) = build_tree(RuleSet::simple());

    let stats = store.stats();
    assert_eq!(stats.node_count, 41);
    assert_eq!(stats.terminal_count, 24);
    assert!(stats.terminal_count <= 24, "at most 4! move orders");
}

#[test]
fn test_root_children_handles() {
    let (store, root) = classic();

    let handles: Vec<_> = store.children(*root).iter().map(|id| id.raw()).collect();
    assert_eq!(
        handles,
        vec![1, 59_706, 123_611, 183_316, 247_221, 302_726, 366_631, 426_336, 490_241]
    );
}

// =============================================================================
// Outcome coverage and value consistency
// =============================================================================

#[test]
fn test_classic_tree_is_valid() {
    let (store, _) = classic();
    assert_eq!(validate(store), Ok(()));
}

#[test]
fn test_leaves_are_exactly_the_terminals() {
    let (store, _) = classic();

    for (id, position) in store.iter() {
        assert_eq!(
            position.children.is_empty(),
            position.outcome().is_terminal(),
            "{id}"
        );
    }
}

#[test]
fn test_classic_terminal_values() {
    let (store, _) = classic();

    for (id, position) in store.iter().filter(|(_, p)| p.is_terminal()) {
        match position.outcome() {
            // Whoever completed the line is the mover; the player to move lost.
            Outcome::Won(winner) => {
                assert_eq!(winner, position.mover(), "{id}");
                assert_eq!(position.verdict, Verdict::Defeat, "{id}");
                assert_eq!(position.value, -1, "{id}");
            }
            Outcome::Stalemate => {
                assert_eq!(position.round, 9, "{id}");
                assert_eq!(position.value, 0, "{id}");
            }
            Outcome::InProgress => panic!("{id} is a leaf in progress"),
        }
    }
}

#[test]
fn test_zero_sum_best_child() {
    let (store, _) = classic();

    for (id, position) in store.iter().filter(|(_, p)| !p.is_terminal()) {
        let best = store.best_move(id).expect("internal position has a best move");
        assert_eq!(position.value, -store.value(best), "{id}");
        assert!(position.children.contains(&best), "{id}");
    }
}

#[test]
fn test_best_move_is_earliest_among_equals() {
    let (store, _) = classic();

    for (id, position) in store.iter().filter(|(_, p)| !p.is_terminal()) {
        let best_value = position.children.iter().map(|&c| -store.value(c)).max().unwrap();
        let first_best = position
            .children
            .iter()
            .copied()
            .find(|&c| -store.value(c) == best_value)
            .unwrap();
        assert_eq!(position.best_move, first_best, "{id}");
        assert_eq!(position.value, best_value, "{id}");
    }
}

// =============================================================================
// Known results
// =============================================================================

#[test]
fn test_classic_root_is_a_draw() {
    let (store, root) = classic();

    assert_eq!(store.value(*root), 0);
    for &child in store.children(*root) {
        assert_eq!(store.value(child), 0);
    }
}

#[test]
fn test_classic_principal_line() {
    let (store, root) = classic();

    let line = store.principal_line(*root);
    let squares: Vec<_> = line[1..]
        .iter()
        .map(|&id| store.get(id).square.unwrap() as usize)
        .collect();
    assert_eq!(squares, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);

    let last = *line.last().unwrap();
    assert_eq!(last, PositionId::new(24_131));
    assert_eq!(store.outcome(last), Outcome::Stalemate);

    let x = Some(Player::X);
    let o = Some(Player::O);
    assert_eq!(store.board(last), &Board::from_cells(&[x, x, o, o, o, x, x, o, x]));
}

#[test]
fn test_corner_opening_answered_by_center() {
    let (store, root) = classic();

    let corner = store.children(*root)[0];
    let reply = store.best_move(corner).unwrap();
    assert_eq!(store.get(reply).square, Some(4));
    assert_eq!(store.value(corner), 0);
}

#[test]
fn test_simple_root_value_pinned() {
    // Characterisation of the simple variant's scoring: X's second mark
    // always completes a pair on round 3, which scores as a victory for the
    // player to move (O). X therefore never escapes a loss.
    let (store, root) = build_tree(RuleSet::simple());

    assert_eq!(store.value(root), -1);
    assert_eq!(store.stats().o_wins, 24);
    assert_eq!(store.stats().x_wins, 0);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_builds_are_identical() {
    for rules in [RuleSet::simple(), RuleSet::classic()] {
        let (a, root_a) = build_tree(rules);
        let (b, root_b) = build_tree(rules);

        assert_eq!(root_a, root_b);
        assert_eq!(a.len(), b.len());
        for ((id_a, pa), (id_b, pb)) in a.iter().zip(b.iter()) {
            assert_eq!(id_a, id_b);
            assert_eq!(pa.board, pb.board);
            assert_eq!(pa.value, pb.value);
            assert_eq!(pa.best_move, pb.best_move);
            assert_eq!(pa.children, pb.children);
        }
    }
}
