//! ttt-solve - exhaustive tic-tac-toe solver
//!
//! 1. Builds the full game tree for the selected rule set
//! 2. Reports node count and build duration
//! 3. Optionally prints the optimal-vs-optimal game
//! 4. Plays optimal-vs-random trials and tabulates the outcomes

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

mod cli;

use crate::cli::Config;
use tictactoe_minimax::{
    optimal_game, render_position, run_trials, validate, BuildStats, Outcome, Player,
    RuleSet, TrialReport, TreeBuilder, TreeStats, Variant,
};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

#[derive(Serialize)]
struct Summary {
    variant: Variant,
    root_value: i8,
    build: BuildStats,
    tree: TreeStats,
    optimal_line: Option<Vec<usize>>,
    trials: TrialReport,
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;

    let variant = config.variant()?;
    let rules = RuleSet::new(variant);
    info!(%variant, trials = config.trials, seed = config.seed, "solving");

    let mut builder = TreeBuilder::new(rules);
    let root = builder.build();
    let build = builder.stats().clone();
    let store = builder.into_store();

    info!(
        positions = build.positions,
        seconds = build.time_us as f64 / 1_000_000.0,
        "mapped game tree"
    );

    if config.validate {
        validate(&store).context("built tree failed validation")?;
        info!("all tree invariants hold");
    }

    let optimal = config.show_optimal.then(|| optimal_game(&store, root));
    let report = run_trials(&store, root, &config.trial_config()?)?;

    if config.json {
        let summary = Summary {
            variant,
            root_value: store.value(root),
            build,
            tree: store.stats(),
            optimal_line: optimal.as_ref().map(|trace| trace.squares(&store)),
            trials: report,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let tree = store.stats();
    println!(
        "Mapped {} boards in {:.3} seconds ({:.0} boards/s)",
        build.positions,
        build.time_us as f64 / 1_000_000.0,
        build.positions_per_second()
    );
    println!(
        "{} terminal, {} distinct boards, branching factor {:.2}",
        tree.terminal_count,
        tree.distinct_boards,
        tree.branching_factor()
    );
    println!("Root value: {}", store.value(root));

    if let Some(trace) = optimal {
        println!("\nOptimal game");
        for &id in &trace.path {
            println!("{}", render_position(&store, id));
        }
        println!("Result: {}", trace.outcome);
    }

    let optimal_player = report.optimal_player.unwrap_or(Player::X);
    println!("\nOptimal ({optimal_player}) vs. random, {} games", report.trials);
    let rows = Player::ALL
        .into_iter()
        .map(|player| (Outcome::Won(player), report.wins(player)))
        .chain([(Outcome::Stalemate, report.stalemates)]);
    for (outcome, count) in rows {
        println!(
            "{:<10} {:>8} ({:.1}%)",
            outcome.to_string(),
            count,
            report.frequency(outcome) * 100.0
        );
    }

    Ok(())
}
