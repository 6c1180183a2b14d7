//! Core types for the Hex board game
//!
//! This crate provides the pieces the move engine and the game driver
//! are built on:
//! - `Graph`: adjacency lists with a per-cell marker table and
//!   filtered neighbor queries
//! - `HexBoard`: the rhombic board, its borders, and play bookkeeping
//! - `PathDetector`: the start-to-finish chain search invoked after
//!   every real move and millions of times per simulated move
//!
//! The board-graph text format (`size`/`node`/`data`/`edge` lines) is
//! implemented on `Graph` and re-exposed on `HexBoard` for the hidden
//! dump command and for tests.

pub mod board;
pub mod connect;
pub mod graph;

// Re-export main types for convenience
pub use board::{BoardError, HexBoard, Marker, Move, RowCol};
pub use connect::PathDetector;
pub use graph::{Edge, Graph, GraphFileError};
