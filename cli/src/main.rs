//! Hex: play the connection game against a Monte Carlo engine.
//!
//! An interactive terminal program that:
//! 1. Builds an N x N Hex board (N odd, default 5)
//! 2. Alternates human moves read from stdin with computer moves
//!    chosen by random-completion simulation
//! 3. Checks for a winning chain after every ply and declares the
//!    winner

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod driver;
mod input;
mod render;
mod stats;

use hex_core::HexBoard;
use hex_mcts::{MonteCarloConfig, MonteCarloEngine};

use crate::config::Config;
use crate::driver::{GameDriver, Outcome};
use crate::input::Prompter;

/// Logs go to stderr so the board stays readable on stdout.
fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);

    info!(
        size = config.size,
        trials = config.trials,
        seed = ?config.seed,
        "starting game"
    );

    let board = HexBoard::new(config.size)?;

    let mut mc_config = MonteCarloConfig::default().with_trials(config.trials);
    if let Some(seed) = config.seed {
        mc_config = mc_config.with_seed(seed);
    }
    let engine = MonteCarloEngine::for_board(mc_config, &board);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut driver = GameDriver::new(board, engine, prompter);
    match driver.run()? {
        Outcome::Quit => info!("game abandoned"),
        outcome => info!(?outcome, "game finished"),
    }

    Ok(())
}
