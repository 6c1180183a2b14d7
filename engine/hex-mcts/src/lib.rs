//! Monte Carlo move selection for Hex.
//!
//! The engine estimates, for every empty cell, the probability that
//! placing the computer's marker there wins after the remaining
//! empties are filled uniformly at random with alternating markers.
//! One estimate is `n_trials` random completions; the chosen move is
//! the candidate with the highest win count.
//!
//! # Usage
//!
//! ```rust
//! use hex_core::{HexBoard, Marker, PathDetector};
//! use hex_mcts::{MonteCarloConfig, MonteCarloEngine};
//!
//! let mut board = HexBoard::new(5).unwrap();
//! let mut detector = PathDetector::for_board(&board);
//! let config = MonteCarloConfig::for_testing();
//! let mut engine = MonteCarloEngine::for_board(config, &board);
//!
//! let rc = engine
//!     .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
//!     .unwrap();
//! assert!(board.is_valid_move(rc));
//! ```
//!
//! The engine uses the real marker table as simulation scratch but
//! restores every touched cell before returning, so the observable
//! board state is unchanged.

pub mod config;
pub mod search;

// Re-export main types for convenience
pub use config::MonteCarloConfig;
pub use search::{MonteCarloEngine, SelectError};
