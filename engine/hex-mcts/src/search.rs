//! Monte Carlo move selection.
//!
//! For each empty cell, in empty-list order:
//! 1. Fix the candidate: set the computer's marker on it
//! 2. Run `n_trials` random completions of the rest of the board,
//!    alternating markers starting with the human side
//! 3. Count the completions where the computer ends up with a
//!    start-to-finish chain
//!
//! The candidate with the highest win count is returned, ties going
//! to the earliest candidate. All scratch is owned by the engine and
//! reused, so a `choose_move` call does not allocate in steady state.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use hex_core::{HexBoard, Marker, PathDetector, RowCol};

use crate::config::MonteCarloConfig;

/// Errors from move selection.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The board has no empty cell. The driver never calls the
    /// selector on a finished board, so hitting this is a bug.
    #[error("no empty cells remain on the board")]
    NoEmptyCells,
}

/// The move selector and its reusable simulation scratch.
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
    rng: ChaCha20Rng,
    /// Every empty cell except the current candidate.
    shuffle_idxs: Vec<usize>,
    /// Per-trial copy of `shuffle_idxs`, shuffled and consumed.
    throw_away: Vec<usize>,
    /// Win count per candidate, parallel to the empty list.
    wins_per_move: Vec<u32>,
}

impl MonteCarloEngine {
    /// Create an engine with scratch capacity for `capacity` cells.
    /// The RNG is seeded once here, from the config's seed or OS
    /// entropy.
    pub fn new(config: MonteCarloConfig, capacity: usize) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            shuffle_idxs: Vec::with_capacity(capacity),
            throw_away: Vec::with_capacity(capacity),
            wins_per_move: Vec::with_capacity(capacity),
        }
    }

    pub fn for_board(config: MonteCarloConfig, board: &HexBoard) -> Self {
        Self::new(config, board.cell_count())
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Pick the computer's move.
    ///
    /// Uses the real marker table as scratch but restores it before
    /// returning: the marker table and the empty list are observably
    /// unchanged. The returned coordinate is always a currently empty
    /// cell.
    pub fn choose_move(
        &mut self,
        board: &mut HexBoard,
        detector: &mut PathDetector,
        computer: Marker,
        human: Marker,
    ) -> Result<RowCol, SelectError> {
        if board.empty_cells().is_empty() {
            return Err(SelectError::NoEmptyCells);
        }

        self.shuffle_idxs.clear();
        self.wins_per_move.clear();

        let candidates = board.empty_cells().len();
        for i in 0..candidates {
            let candidate = board.empty_cells()[i];
            board.set_marker_at(candidate, computer);

            // Maintain the invariant: shuffle_idxs equals the empty
            // list with empty[i] omitted. The first iteration copies
            // the tail; afterwards the previous list differs from the
            // target in exactly one slot, position i-1, which holds
            // empty[i] and must hold empty[i-1] again.
            if i == 0 {
                self.shuffle_idxs
                    .extend_from_slice(&board.empty_cells()[1..]);
            } else {
                self.shuffle_idxs[i - 1] = board.empty_cells()[i - 1];
            }

            let mut wins = 0u32;
            for _ in 0..self.config.n_trials {
                self.throw_away.clear();
                self.throw_away.extend_from_slice(&self.shuffle_idxs);
                self.throw_away.shuffle(&mut self.rng);

                // Alternate markers over the shuffled cells. The human
                // side always takes the first remaining slot,
                // regardless of who moved first in the real game.
                let mut current = human;
                let mut next = computer;
                for &cell in &self.throw_away {
                    board.set_marker_at(cell, current);
                    std::mem::swap(&mut current, &mut next);
                }

                if detector.find_ends(board, computer, true) == computer {
                    wins += 1;
                }
            }

            self.wins_per_move.push(wins);
            board.set_marker_at(candidate, Marker::Empty);
            trace!(candidate, wins, "candidate scored");
        }

        // Highest win count wins; ties go to the earliest candidate.
        let mut best = board.empty_cells()[0];
        let mut max = 0u32;
        for (i, &wins) in self.wins_per_move.iter().enumerate() {
            if wins > max {
                max = wins;
                best = board.empty_cells()[i];
            }
        }

        // The per-candidate loop already undid its own marker; this
        // bulk restore makes the round-trip guarantee explicit.
        board.reset_empty_cells();

        let rc = board.row_col_of(best);
        debug!(
            row = rc.row,
            col = rc.col,
            wins = max,
            trials = self.config.n_trials,
            candidates,
            "move selected"
        );
        Ok(rc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_for(board: &HexBoard, trials: u32, seed: u64) -> MonteCarloEngine {
        let config = MonteCarloConfig::default()
            .with_trials(trials)
            .with_seed(seed);
        MonteCarloEngine::for_board(config, board)
    }

    #[test]
    fn returns_an_empty_cell() {
        let mut board = HexBoard::new(5).unwrap();
        let mut detector = PathDetector::for_board(&board);
        board.place(Marker::O, RowCol::new(3, 3)).unwrap();

        let mut engine = engine_for(&board, 20, 1);
        let rc = engine
            .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
            .unwrap();
        assert!(board.is_valid_move(rc));
    }

    #[test]
    fn does_not_mutate_observable_board_state() {
        let mut board = HexBoard::new(5).unwrap();
        let mut detector = PathDetector::for_board(&board);
        board.place(Marker::X, RowCol::new(2, 2)).unwrap();
        board.place(Marker::O, RowCol::new(4, 4)).unwrap();

        let markers_before: Vec<Marker> =
            (0..board.cell_count()).map(|i| board.marker_at(i)).collect();
        let empties_before = board.empty_cells().to_vec();
        let count_before = board.move_count();

        let mut engine = engine_for(&board, 30, 9);
        engine
            .choose_move(&mut board, &mut detector, Marker::O, Marker::X)
            .unwrap();

        let markers_after: Vec<Marker> =
            (0..board.cell_count()).map(|i| board.marker_at(i)).collect();
        assert_eq!(markers_before, markers_after);
        assert_eq!(empties_before, board.empty_cells());
        assert_eq!(count_before, board.move_count());
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let play = || {
            let mut board = HexBoard::new(5).unwrap();
            let mut detector = PathDetector::for_board(&board);
            let mut engine = engine_for(&board, 200, 42);
            engine
                .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
                .unwrap()
        };

        let first = play();
        for _ in 0..3 {
            assert_eq!(play(), first);
        }
    }

    #[test]
    fn takes_the_winning_cell_when_one_move_remains() {
        // X holds all of column 3 except (3,3); the only empty cell
        // completes the chain, so every trial is a win for it.
        let mut board = HexBoard::new(5).unwrap();
        let mut detector = PathDetector::for_board(&board);

        let mut o_cells = Vec::new();
        for row in 1..=5 {
            for col in 1..=5 {
                if col == 3 && row != 3 {
                    board.place(Marker::X, RowCol::new(row, col)).unwrap();
                } else if !(row == 3 && col == 3) {
                    o_cells.push(RowCol::new(row, col));
                }
            }
        }
        // O takes half the remaining cells; the rest stay empty so
        // several candidates are in play.
        for rc in o_cells {
            if (rc.row + rc.col) % 2 == 0 {
                board.place(Marker::O, rc).unwrap();
            }
        }

        let mut engine = engine_for(&board, 40, 3);
        let rc = engine
            .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
            .unwrap();
        assert_eq!(rc, RowCol::new(3, 3));
    }

    #[test]
    fn errors_on_a_full_board() {
        let mut board = HexBoard::new(3).unwrap();
        let mut detector = PathDetector::for_board(&board);
        let sides = [Marker::X, Marker::O];
        for i in 0..9 {
            let rc = board.row_col_of(i);
            board.place(sides[i % 2], rc).unwrap();
        }

        let mut engine = engine_for(&board, 10, 5);
        let err = engine
            .choose_move(&mut board, &mut detector, Marker::X, Marker::O)
            .unwrap_err();
        assert!(matches!(err, SelectError::NoEmptyCells));
    }

    #[test]
    fn full_random_boards_have_exactly_one_winner() {
        // The no-draw law the whole-board detector mode relies on:
        // however a board is filled, exactly one side has a chain and
        // both whole-board calls name it.
        for seed in 0..10u64 {
            let mut board = HexBoard::new(5).unwrap();
            let mut detector = PathDetector::for_board(&board);
            let mut rng = ChaCha20Rng::seed_from_u64(seed);

            let mut cells: Vec<usize> = (0..board.cell_count()).collect();
            cells.shuffle(&mut rng);
            for (i, &cell) in cells.iter().enumerate() {
                let side = if i % 2 == 0 { Marker::X } else { Marker::O };
                board.set_marker_at(cell, side);
            }

            let from_x = detector.find_ends(&board, Marker::X, true);
            let from_o = detector.find_ends(&board, Marker::O, true);
            assert_eq!(from_x, from_o, "seed {}", seed);

            let x_chain = detector.find_ends(&board, Marker::X, false) == Marker::X;
            let o_chain = detector.find_ends(&board, Marker::O, false) == Marker::O;
            assert!(x_chain ^ o_chain, "seed {}", seed);
            let winner = if x_chain { Marker::X } else { Marker::O };
            assert_eq!(winner, from_x, "seed {}", seed);
        }
    }

    #[test]
    fn shuffle_list_matches_empty_list_minus_candidate() {
        // Drive the incremental update the way choose_move does and
        // check its invariant directly at every iteration.
        let mut board = HexBoard::new(5).unwrap();
        board.place(Marker::X, RowCol::new(1, 2)).unwrap();
        board.place(Marker::O, RowCol::new(4, 3)).unwrap();

        let empties = board.empty_cells().to_vec();
        let mut shuffle_idxs: Vec<usize> = Vec::new();
        for i in 0..empties.len() {
            if i == 0 {
                shuffle_idxs.extend_from_slice(&empties[1..]);
            } else {
                shuffle_idxs[i - 1] = empties[i - 1];
            }

            let mut expected = empties.clone();
            expected.remove(i);
            assert_eq!(shuffle_idxs, expected, "iteration {}", i);
        }
    }
}
