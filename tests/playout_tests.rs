//! Playouts and trial reports over the classic tree.

use std::sync::OnceLock;

use proptest::prelude::*;
use tictactoe_minimax::{
    build_tree, optimal_game, play_game, run_trials, OptimalPolicy, Outcome, Player, PlayoutRng,
    PositionId, PositionStore, RuleSet, TrialConfig, UniformPolicy,
};

fn classic() -> &'static (PositionStore, PositionId) {
    static TREE: OnceLock<(PositionStore, PositionId)> = OnceLock::new();
    TREE.get_or_init(|| build_tree(RuleSet::classic()))
}

// =============================================================================
// Optimal play
// =============================================================================

#[test]
fn test_optimal_game_is_a_draw() {
    let (store, root) = classic();

    let trace = optimal_game(store, *root);
    assert_eq!(trace.moves(), 9);
    assert_eq!(trace.outcome, Outcome::Stalemate);
    assert_eq!(trace.squares(store), vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
}

#[test]
fn test_optimal_x_never_loses_default_trials() {
    let (store, root) = classic();

    let report = run_trials(store, *root, &TrialConfig::default().with_trials(200)).unwrap();
    assert_eq!(report.trials, 200);
    assert_eq!(report.losses_for(Player::X), 0);
    assert_eq!(report.x_wins + report.stalemates, 200);
}

#[test]
fn test_random_games_follow_tree_edges() {
    let (store, root) = classic();
    let mut rng = PlayoutRng::new(11);

    for _ in 0..100 {
        let trace = play_game(store, *root, &UniformPolicy, &UniformPolicy, &mut rng);
        assert!(trace.outcome.is_terminal());
        assert!(trace.moves() >= 5 && trace.moves() <= 9);
        for pair in trace.path.windows(2) {
            assert!(store.children(pair[0]).contains(&pair[1]));
        }
    }
}

#[test]
fn test_final_board_never_negative_for_optimal_player() {
    let (store, root) = classic();
    let mut rng = PlayoutRng::new(3);

    for optimal in Player::ALL {
        for _ in 0..100 {
            let trace = match optimal {
                Player::X => play_game(store, *root, &OptimalPolicy, &UniformPolicy, &mut rng),
                Player::O => play_game(store, *root, &UniformPolicy, &OptimalPolicy, &mut rng),
            };
            let last = trace.last().unwrap();
            let value = if store.get(last).to_move() == optimal {
                trace.final_value
            } else {
                -trace.final_value
            };

            assert!(value >= 0, "{optimal} lost at {last}");
            assert_eq!(value, trace.score_for(optimal));
        }
    }
}

#[test]
fn test_reports_depend_on_seed_only() {
    let (store, root) = classic();
    let config = TrialConfig::default().with_trials(50).with_seed(2024);

    let first = run_trials(store, *root, &config).unwrap();
    let second = run_trials(store, *root, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_trials_is_an_error() {
    let (store, root) = build_tree(RuleSet::simple());
    assert!(run_trials(&store, root, &TrialConfig::default().with_trials(0)).is_err());
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_optimal_player_never_loses(seed in any::<u64>(), as_o in any::<bool>()) {
        let (store, root) = classic();
        let optimal_player = if as_o { Player::O } else { Player::X };
        let config = TrialConfig::default()
            .with_trials(20)
            .with_seed(seed)
            .with_optimal_player(optimal_player);

        let report = run_trials(store, *root, &config).unwrap();
        prop_assert_eq!(report.trials, 20);
        prop_assert_eq!(report.losses_for(optimal_player), 0);
    }

    #[test]
    fn prop_simple_variant_always_goes_to_o(seed in any::<u64>()) {
        let (store, root) = build_tree(RuleSet::simple());
        let config = TrialConfig::default().with_trials(5).with_seed(seed);

        let report = run_trials(&store, root, &config).unwrap();
        prop_assert_eq!(report.o_wins, 5);
    }
}
