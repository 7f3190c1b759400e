//! Command-line configuration for `ttt-solve`.
//!
//! Defaults can be overridden by `TTT_*` environment variables; CLI flags
//! take highest priority.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use tictactoe_minimax::{Player, TrialConfig, Variant};

fn default_variant() -> String {
    std::env::var("TTT_VARIANT").unwrap_or_else(|_| "classic".to_string())
}

fn default_trials() -> u32 {
    std::env::var("TTT_TRIALS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

fn default_seed() -> u64 {
    std::env::var("TTT_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(42)
}

fn default_log_level() -> String {
    std::env::var("TTT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[derive(Parser, Debug, Clone)]
#[command(name = "ttt-solve")]
#[command(about = "Solve a tic-tac-toe variant by exhaustive backward induction")]
#[command(
    long_about = "Builds the complete game tree for the selected rule set, reports its size
and build time, then plays the optimal strategy against a uniformly random
opponent and tabulates the outcomes."
)]
pub struct Config {
    /// Rule set to solve (classic or simple)
    #[arg(long, default_value_t = default_variant())]
    pub variant: String,

    /// Number of optimal-vs-random games to play
    #[arg(long, default_value_t = default_trials())]
    pub trials: u32,

    /// Seed for the random player
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Seat of the optimal player (x moves first)
    #[arg(long, default_value = "x")]
    pub optimal_player: String,

    /// Print the optimal-vs-optimal game
    #[arg(long)]
    pub show_optimal: bool,

    /// Check every tree invariant after building
    #[arg(long)]
    pub validate: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.variant()?;
        self.optimal_player()?;

        if self.trials == 0 {
            return Err(anyhow!("trials must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn variant(&self) -> Result<Variant> {
        Ok(self.variant.parse()?)
    }

    pub fn optimal_player(&self) -> Result<Player> {
        Ok(self.optimal_player.parse()?)
    }

    pub fn trial_config(&self) -> Result<TrialConfig> {
        Ok(TrialConfig::default()
            .with_trials(self.trials)
            .with_seed(self.seed)
            .with_optimal_player(self.optimal_player()?))
    }
}
