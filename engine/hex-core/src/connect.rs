//! Start-to-finish chain detection.
//!
//! This is the routine the move selector calls once per simulated
//! board, so it owns all of its scratch and never allocates in steady
//! state.

use std::collections::VecDeque;

use crate::board::{HexBoard, Marker};

/// Frontier search for a chain between a side's borders.
///
/// The search does not materialize the path. It seeds a work queue
/// with the side's markers on the finish border and extends each
/// frontier cell through same-side neighbors until one lands on the
/// start border. Every cell that enters the frontier is captured at
/// the same moment and never revisited, so total work is bounded by
/// the edges of the subgraph induced by the side's markers.
#[derive(Debug)]
pub struct PathDetector {
    frontier: VecDeque<usize>,
    captured: Vec<usize>,
    neighbors: Vec<usize>,
}

impl PathDetector {
    /// Scratch sized for a board of `cell_count` cells. One side can
    /// hold at most half the cells plus one.
    pub fn new(cell_count: usize) -> Self {
        Self {
            frontier: VecDeque::with_capacity(cell_count / 2 + 1),
            captured: Vec::with_capacity(cell_count / 2 + 1),
            neighbors: Vec::with_capacity(6),
        }
    }

    pub fn for_board(board: &HexBoard) -> Self {
        Self::new(board.cell_count())
    }

    /// Decide whether `side` has a chain from its finish border to its
    /// start border.
    ///
    /// Returns `side` if the chain exists. Otherwise returns `Empty`,
    /// except with `whole_board` set: the move selector passes that
    /// after a full random fill, where exactly one side must have a
    /// chain, so no chain for `side` means the opponent won.
    ///
    /// # Panics
    ///
    /// Panics if `side` is `Marker::Empty`; that is a caller bug, not
    /// a game state.
    pub fn find_ends(&mut self, board: &HexBoard, side: Marker, whole_board: bool) -> Marker {
        assert!(
            !side.is_empty(),
            "find_ends requires Marker::X or Marker::O"
        );

        self.frontier.clear();
        self.captured.clear();

        // Seed from the finish border. The start border would work
        // too; either way each seed is captured so it enters at most
        // once.
        for &cell in board.finish_border(side) {
            if board.marker_at(cell) == side {
                self.frontier.push_back(cell);
                self.captured.push(cell);
            }
        }

        while !self.frontier.is_empty() {
            // Extend, branch, or reject the chain at the queue front.
            loop {
                let front = self.frontier[0];
                if board.is_on_start_border(front, side) {
                    return side;
                }

                self.neighbors.clear();
                board.graph().neighbors_matching_into(
                    front,
                    side,
                    &self.captured,
                    &mut self.neighbors,
                );

                if self.neighbors.is_empty() {
                    // Dead end: discard and pick up the next candidate.
                    self.frontier.pop_front();
                    break;
                }

                // Advance the frontier cell to its first neighbor and
                // queue the rest as new candidate endpoints.
                self.frontier[0] = self.neighbors[0];
                self.captured.push(self.neighbors[0]);
                for &cell in &self.neighbors[1..] {
                    self.frontier.push_back(cell);
                    self.captured.push(cell);
                }
            }
        }

        if whole_board {
            // A full board always carries exactly one chain; if it is
            // not this side's, it is the opponent's.
            side.opponent()
        } else {
            Marker::Empty
        }
    }

    /// Winner on a board that may not be full: tries X then O with
    /// partial-board semantics. Returns `Empty` while the game is
    /// still open.
    pub fn who_won(&mut self, board: &HexBoard) -> Marker {
        for side in [Marker::X, Marker::O] {
            let winner = self.find_ends(board, side, false);
            if !winner.is_empty() {
                return winner;
            }
        }
        Marker::Empty
    }
}
