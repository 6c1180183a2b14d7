//! Command-line configuration for the Hex game.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "hex")]
#[command(about = "Play Hex against a Monte Carlo move engine")]
#[command(
    long_about = "Play Hex on an N x N rhombic board against the computer.

X connects the top row to the bottom row; O connects the left column
to the right column. The computer estimates every candidate move by
random completions of the board and plays the one that wins most often."
)]
pub struct Config {
    /// Board edge length (positive odd number)
    #[arg(default_value_t = 5)]
    pub size: usize,

    /// Random completions per candidate move
    #[arg(default_value_t = 1000)]
    pub trials: u32,

    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size % 2 == 0 {
            return Err(anyhow!(
                "board size must be a positive odd number, got {}",
                self.size
            ));
        }

        if self.trials == 0 {
            return Err(anyhow!("trials must be at least 1"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}
