//! The game driver: alternates human and computer plies, checks for a
//! winner once one is possible, and declares the result.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use hex_core::{HexBoard, Marker, PathDetector, RowCol};
use hex_mcts::MonteCarloEngine;

use crate::input::{Command, Prompter, BAD_POSITION_MSG, NOT_EMPTY_MSG};
use crate::render;
use crate::stats::GameStats;

/// Fixed file the hidden dump command writes to.
pub const DUMP_FILE: &str = "board_graph.txt";

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Quit,
}

/// One interactive game: board, detector, move engine, and the
/// player-facing prompter.
pub struct GameDriver<R, W> {
    board: HexBoard,
    detector: PathDetector,
    engine: MonteCarloEngine,
    prompter: Prompter<R, W>,
    stats: GameStats,
    dump_path: PathBuf,
}

impl<R: BufRead, W: Write> GameDriver<R, W> {
    pub fn new(board: HexBoard, engine: MonteCarloEngine, prompter: Prompter<R, W>) -> Self {
        let detector = PathDetector::for_board(&board);
        Self {
            board,
            detector,
            engine,
            prompter,
            stats: GameStats::new(),
            dump_path: PathBuf::from(DUMP_FILE),
        }
    }

    /// Redirect the hidden dump command's output file.
    pub fn with_dump_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = path.into();
        self
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    /// Play one full game. Returns how it ended; errors are reserved
    /// for real failures (I/O, or an engine bug producing an invalid
    /// move).
    pub fn run(&mut self) -> Result<Outcome> {
        let human_first = self.prompter.ask_goes_first()?;
        let (human, computer) = if human_first {
            (Marker::X, Marker::O)
        } else {
            (Marker::O, Marker::X)
        };
        self.explain_sides(human_first)?;
        info!(%human, %computer, human_first, "sides assigned");

        // A chain cannot exist before this many plies.
        let min_plies = 2 * self.board.edge_len() - 1;
        let mut to_move = if human_first { human } else { computer };

        loop {
            if to_move == human {
                if self.human_ply(human)? == Some(Outcome::Quit) {
                    self.prompter.say("Game over! Come back again...\n")?;
                    return Ok(Outcome::Quit);
                }
            } else {
                self.computer_ply(computer, human)?;
            }

            if self.board.move_count() >= min_plies {
                let started = Instant::now();
                let winner = self.detector.who_won(&self.board);
                self.stats.add_assessment(started.elapsed());

                if !winner.is_empty() {
                    let outcome = if winner == human {
                        Outcome::HumanWins
                    } else {
                        Outcome::ComputerWins
                    };
                    self.announce(outcome)?;
                    self.prompter.say(&render::render(&self.board))?;
                    debug!(moves = ?self.board.move_history(), "move history");
                    self.stats.log_summary(self.board.move_count());
                    return Ok(outcome);
                }
            }

            to_move = to_move.opponent();
        }
    }

    /// One human turn: show the board, then read commands until a
    /// valid move lands. Returns `Some(Quit)` on the quit sentinel or
    /// end of input.
    fn human_ply(&mut self, side: Marker) -> Result<Option<Outcome>> {
        self.prompter.say(&render::render(&self.board))?;
        self.prompter
            .say("Enter a move in an empty position that contains '.'\n")?;

        loop {
            match self.prompter.read_move()? {
                Command::Quit => return Ok(Some(Outcome::Quit)),
                Command::DumpBoard => {
                    self.dump_board_graph()?;
                    self.prompter.say("Board graph written.\n")?;
                }
                Command::Move(rc) => {
                    if self.board.index_of(rc).is_err() {
                        self.prompter.say(BAD_POSITION_MSG)?;
                        continue;
                    }
                    if !self.board.is_valid_move(rc) {
                        self.prompter.say(NOT_EMPTY_MSG)?;
                        continue;
                    }
                    self.board
                        .place(side, rc)
                        .expect("validated move must commit");
                    self.prompter
                        .say(&format!("Your move at {} was valid.\n", rc))?;
                    debug!(row = rc.row, col = rc.col, %side, "human moved");
                    return Ok(None);
                }
            }
        }
    }

    /// One computer turn. An invalid move out of the engine is a bug,
    /// not a game event, and aborts with an error.
    fn computer_ply(&mut self, side: Marker, human: Marker) -> Result<()> {
        let started = Instant::now();
        let rc = self
            .engine
            .choose_move(&mut self.board, &mut self.detector, side, human)
            .context("move selection failed")?;
        self.stats.add_simulation(started.elapsed());

        self.board
            .place(side, rc)
            .context("computer produced an invalid move")?;
        self.prompter
            .say(&format!("The computer moved at {}.\n\n", rc))?;
        debug!(row = rc.row, col = rc.col, %side, "computer moved");
        Ok(())
    }

    fn explain_sides(&mut self, human_first: bool) -> Result<()> {
        if human_first {
            self.prompter.say(
                "\nYou go first playing X markers.\n\
                 Make a path from the top row to the bottom row.\n\
                 The computer goes second playing O markers,\n\
                 connecting the left column to the right column.\n\n",
            )?;
        } else {
            self.prompter.say(
                "\nThe computer goes first playing X markers.\n\
                 You go second playing O markers.\n\
                 Make a path from the first column to the last column.\n\n",
            )?;
        }
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        let line = match outcome {
            Outcome::HumanWins => "We have a winner. You won. Congratulations!\n",
            Outcome::ComputerWins => "We have a winner. The computer beat you )-:\n",
            Outcome::Quit => unreachable!("quit is announced at the prompt"),
        };
        self.prompter.say(line)?;
        self.prompter
            .say("Game over. Come back and play again!\n\n")?;
        Ok(())
    }

    /// Write the adjacency dump, creating or truncating the file and
    /// flushing before returning.
    fn dump_board_graph(&self) -> Result<()> {
        let file = File::create(&self.dump_path)
            .with_context(|| format!("cannot create {}", self.dump_path.display()))?;
        let mut writer = BufWriter::new(file);
        self.board
            .write_to(&mut writer)
            .context("cannot write board graph")?;
        writer.flush().context("cannot flush board graph")?;
        info!(path = %self.dump_path.display(), "board graph dumped");
        Ok(())
    }
}
