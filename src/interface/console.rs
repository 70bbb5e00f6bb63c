//! The interactive game loop: a human at the console against the [MoveSelector].
use std::fmt::{Debug, Formatter};
use std::io::{BufRead, Read, Write};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::ai::heuristic::{MoveOutcome, MoveSelector};
use crate::board::{Mark, Outcome};
use crate::games::ttt::{Coord, TTTBoard};
use crate::interface::input::parse_index;
use crate::interface::render::Glyphs;

pub const HUMAN: Mark = Mark::A;
pub const COMPUTER: Mark = Mark::B;

/// Longest input line that is still parsed, anything longer is rejected as invalid.
const MAX_LINE_LEN: u64 = 256;

pub struct ConsoleGame<I: BufRead, O: Write, R: Rng> {
    input: I,
    output: O,
    glyphs: Glyphs,

    board: TTTBoard,
    selector: MoveSelector<R>,

    line: Vec<u8>,
}

enum Prompt {
    Value(i64),
    Invalid,
    Closed,
}

impl<I: BufRead, O: Write, R: Rng> Debug for ConsoleGame<I, O, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConsoleGame {{ board: {}, glyphs: {:?} }}", self.board.to_compact(), self.glyphs)
    }
}

impl<I: BufRead, O: Write, R: Rng> ConsoleGame<I, O, R> {
    pub fn new(input: I, output: O, glyphs: Glyphs, rng: R) -> Self {
        ConsoleGame {
            input,
            output,
            glyphs,
            board: TTTBoard::default(),
            selector: MoveSelector::new(COMPUTER, rng),
            line: Vec::new(),
        }
    }

    /// Start from `board` instead of the empty board. The human moves first.
    pub fn with_board(mut self, board: TTTBoard) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &TTTBoard {
        &self.board
    }

    /// Play until the game is over, returning the outcome.
    /// Returns `None` if the input ends before that.
    pub fn run(&mut self) -> std::io::Result<Option<Outcome>> {
        writeln!(
            self.output,
            "You are '{}', the computer is: '{}'",
            self.glyphs.mark(HUMAN),
            self.glyphs.mark(COMPUTER)
        )?;
        writeln!(self.output)?;
        info!(board = %self.board.to_compact(), "game started");

        loop {
            if let Some(outcome) = self.board.outcome() {
                self.finish(outcome)?;
                return Ok(Some(outcome));
            }

            self.print_board()?;
            match self.read_human_move()? {
                Some(coord) => debug!(cell = %coord, "human played"),
                None => {
                    warn!(board = %self.board.to_compact(), "input closed before the game was over");
                    self.output.flush()?;
                    return Ok(None);
                }
            }

            if !self.board.is_done() {
                match self.selector.play(&mut self.board) {
                    MoveOutcome::ComputerWon(coord) | MoveOutcome::MoveMade(coord) => {
                        debug!(cell = %coord, "computer played")
                    }
                    MoveOutcome::NoMoveAvailable => {}
                }
            }
        }
    }

    /// Keep prompting until the human enters a legal move, then play it.
    /// Returns `None` if the input is closed.
    fn read_human_move(&mut self) -> std::io::Result<Option<Coord>> {
        loop {
            let col = match self.prompt("column")? {
                Prompt::Value(col) => col,
                Prompt::Invalid => continue,
                Prompt::Closed => return Ok(None),
            };
            let row = match self.prompt("row")? {
                Prompt::Value(row) => row,
                Prompt::Invalid => continue,
                Prompt::Closed => return Ok(None),
            };

            match self.board.try_move(row, col, HUMAN) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => {
                    debug!(row, col, error = ?e, "rejected move");
                    writeln!(self.output, "Invalid move! {}", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, name: &str) -> std::io::Result<Prompt> {
        write!(self.output, "Enter {} number (0-2): ", name)?;
        self.output.flush()?;

        self.line.clear();
        if (&mut self.input).take(MAX_LINE_LEN).read_until(b'\n', &mut self.line)? == 0 {
            return Ok(Prompt::Closed);
        }
        let truncated = self.line.len() as u64 == MAX_LINE_LEN && self.line.last() != Some(&b'\n');
        if truncated {
            self.skip_line()?;
        }

        let parsed = if truncated {
            Err("line too long".to_owned())
        } else {
            match std::str::from_utf8(&self.line) {
                Ok(line) => parse_index(line).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            }
        };

        match parsed {
            Ok(value) => Ok(Prompt::Value(value)),
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(self.output, "Invalid input! Please enter a valid number.")?;
                Ok(Prompt::Invalid)
            }
        }
    }

    /// Drop the rest of an overlong line without buffering it.
    fn skip_line(&mut self) -> std::io::Result<()> {
        loop {
            let (used, done) = {
                let available = self.input.fill_buf()?;
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (available.len(), available.is_empty()),
                }
            };
            self.input.consume(used);
            if done {
                return Ok(());
            }
        }
    }

    fn print_board(&mut self) -> std::io::Result<()> {
        write!(self.output, "{}", self.glyphs.display(&self.board))
    }

    fn finish(&mut self, outcome: Outcome) -> std::io::Result<()> {
        self.print_board()?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", verdict(outcome))?;
        self.output.flush()?;

        info!(?outcome, board = %self.board.to_compact(), "game finished");
        Ok(())
    }
}

/// The closing message for a finished game.
pub fn verdict(outcome: Outcome) -> &'static str {
    match outcome.winner() {
        Some(HUMAN) => "Human Victory",
        Some(_) => "Computer Victory",
        None => "It's a Tie",
    }
}
