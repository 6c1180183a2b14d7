//! The human input boundary.
//!
//! Sentinel integers live only here: a row or column of -1 quits, a
//! row of -5 requests the adjacency dump. The rest of the program sees
//! the closed [`Command`] enum.

use std::io::{self, BufRead, Write};

use hex_core::RowCol;

const QUIT_SENTINEL: i64 = -1;
const DUMP_SENTINEL: i64 = -5;

pub const BAD_POSITION_MSG: &str = "Your move used an invalid row or column.\n";
pub const NOT_EMPTY_MSG: &str = "Your move didn't choose an empty position.\n";

/// A parsed human action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move attempt; may still be off-board or occupied, which the
    /// driver validates.
    Move(RowCol),
    Quit,
    /// The hidden command that writes the board graph to a file.
    DumpBoard,
}

/// Prompt writer and line reader over any input/output pair, so tests
/// can drive the game from scripted strings.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a message to the player.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// The first-move prompt. Accepts y/yes/n/no case-insensitively
    /// and re-prompts anything else.
    pub fn ask_goes_first(&mut self) -> io::Result<bool> {
        loop {
            self.say("\n*** Do you want to go first? (enter y or yes or n or no) ")?;
            let Some(line) = self.read_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the first-move prompt was answered",
                ));
            };
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("    Please enter [y]es or [n]o\n")?,
            }
        }
    }

    /// Read one human command: two whitespace-separated integers.
    /// Parse failures re-prompt; end of input quits the game.
    pub fn read_move(&mut self) -> io::Result<Command> {
        self.say("Enter your move as the row number and the column number, separated by a space.\n")?;
        self.say("Enter -1 -1 to quit.\n")?;
        loop {
            self.say("row col: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(Command::Quit);
            };

            let mut nums = line.split_whitespace().map(str::parse::<i64>);
            let (Some(Ok(row)), Some(Ok(col))) = (nums.next(), nums.next()) else {
                self.say("Please enter 2 integers: \n")?;
                continue;
            };

            if row == QUIT_SENTINEL || col == QUIT_SENTINEL {
                return Ok(Command::Quit);
            }
            if row == DUMP_SENTINEL {
                return Ok(Command::DumpBoard);
            }
            if row < 1 || col < 1 {
                self.say(BAD_POSITION_MSG)?;
                continue;
            }
            return Ok(Command::Move(RowCol::new(row as usize, col as usize)));
        }
    }

    /// Surrender the output sink; used by tests to inspect the
    /// transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            Ok(None) // end of input
        } else {
            Ok(Some(line))
        }
    }
}
