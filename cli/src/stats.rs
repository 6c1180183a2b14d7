//! Cumulative timing for the game session.

use std::time::Duration;

use tracing::info;

/// Where the wall-clock time of a game went: simulating candidate
/// moves versus assessing the winner after real moves.
#[derive(Debug, Default)]
pub struct GameStats {
    simulation_time: Duration,
    assessment_time: Duration,
    computer_moves: u32,
    win_checks: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_simulation(&mut self, elapsed: Duration) {
        self.simulation_time += elapsed;
        self.computer_moves += 1;
    }

    pub fn add_assessment(&mut self, elapsed: Duration) {
        self.assessment_time += elapsed;
        self.win_checks += 1;
    }

    pub fn simulation_time(&self) -> Duration {
        self.simulation_time
    }

    pub fn assessment_time(&self) -> Duration {
        self.assessment_time
    }

    /// Emit the end-of-game summary.
    pub fn log_summary(&self, plies: usize) {
        info!(
            plies,
            computer_moves = self.computer_moves,
            win_checks = self.win_checks,
            simulation_ms = self.simulation_time.as_millis() as u64,
            assessment_ms = self.assessment_time.as_millis() as u64,
            "game timing"
        );
    }
}
