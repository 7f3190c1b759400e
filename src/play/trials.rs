//! Optimal-vs-random trial runs.
//!
//! One player follows the best moves, the other picks uniformly at random.
//! Each trial draws from its own fork of a seeded RNG, so a report can be
//! reproduced from its config alone.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::playout::play_game;
use super::policy::{MovePolicy, OptimalPolicy, UniformPolicy};
use crate::core::{Player, PlayoutRng};
use crate::error::{Error, Result};
use crate::tree::{Outcome, PositionId, PositionStore};

/// Trial configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Number of games to play.
    pub trials: u32,

    /// Random seed for the random player.
    /// Same seed produces the same report.
    pub seed: u64,

    /// Seat taken by the optimal player.
    pub optimal_player: Player,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            seed: 42,
            optimal_player: Player::X,
        }
    }
}

impl TrialConfig {
    /// Create a new config with a custom trial count.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with the optimal player in another seat.
    pub fn with_optimal_player(mut self, player: Player) -> Self {
        self.optimal_player = player;
        self
    }

    /// Reject configs that cannot produce a report.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig {
                message: "trials must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Tabulated trial outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Games played.
    pub trials: u32,

    /// Games won by X.
    pub x_wins: u32,

    /// Games won by O.
    pub o_wins: u32,

    /// Games with no winner.
    pub stalemates: u32,

    /// Seat of the optimal player (`None` for an empty report).
    pub optimal_player: Option<Player>,
}

impl TrialReport {
    /// Create an empty report for the given optimal seat.
    pub fn new(optimal_player: Player) -> Self {
        Self {
            optimal_player: Some(optimal_player),
            ..Self::default()
        }
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Stalemate => self.stalemates += 1,
            Outcome::InProgress => {}
        }
    }

    /// Games won by `player`.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games lost by `player`.
    #[must_use]
    pub fn losses_for(&self, player: Player) -> u32 {
        self.wins(player.opponent())
    }

    /// Fraction of games that ended with `outcome`.
    #[must_use]
    pub fn frequency(&self, outcome: Outcome) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let count = match outcome {
            Outcome::Won(player) => self.wins(player),
            Outcome::Stalemate => self.stalemates,
            Outcome::InProgress => self.trials - self.x_wins - self.o_wins - self.stalemates,
        };
        count as f64 / self.trials as f64
    }
}

/// Play `config.trials` optimal-vs-uniform games from `start`.
pub fn run_trials(store: &PositionStore, start: PositionId, config: &TrialConfig) -> Result<TrialReport> {
    config.validate()?;

    let mut rng = PlayoutRng::new(config.seed);
    let mut report = TrialReport::new(config.optimal_player);

    let optimal: &dyn MovePolicy = &OptimalPolicy;
    let uniform: &dyn MovePolicy = &UniformPolicy;
    let (x_policy, o_policy) = match config.optimal_player {
        Player::X => (optimal, uniform),
        Player::O => (uniform, optimal),
    };

    for trial in 0..config.trials {
        let mut trial_rng = rng.fork();
        let trace = play_game(store, start, x_policy, o_policy, &mut trial_rng);
        trace!(trial, moves = trace.moves(), outcome = %trace.outcome, "trial finished");
        report.record(trace.outcome);
    }

    debug!(
        trials = report.trials,
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        stalemates = report.stalemates,
        "trials complete"
    );

    Ok(report)
}
