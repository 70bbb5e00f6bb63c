//! Text rendering of the board for the console.
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::board::{Cell, Mark};
use crate::games::ttt::{Coord, TTTBoard};

pub const SEPARATOR: &str = "-------------------";

/// The characters used to draw each mark and empty cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Glyphs {
    a: char,
    b: char,
    empty: char,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidGlyphs {
    pub a: char,
    pub b: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            a: 'X',
            b: 'O',
            empty: ' ',
        }
    }
}

impl Glyphs {
    /// Glyphs for the two marks, empty cells stay blank.
    /// Both glyphs must be visible and distinct.
    pub fn new(a: char, b: char) -> Result<Glyphs, InvalidGlyphs> {
        if a == b || a.is_whitespace() || b.is_whitespace() || a.is_control() || b.is_control() {
            return Err(InvalidGlyphs { a, b });
        }
        Ok(Glyphs { a, b, empty: ' ' })
    }

    pub fn mark(&self, mark: Mark) -> char {
        match mark {
            Mark::A => self.a,
            Mark::B => self.b,
        }
    }

    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Some(mark) => self.mark(mark),
            None => self.empty,
        }
    }

    /// Wrap `board` so it can be printed with these glyphs.
    pub fn display<'a>(&'a self, board: &'a TTTBoard) -> BoardDisplay<'a> {
        BoardDisplay { board, glyphs: self }
    }
}

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a TTTBoard,
    glyphs: &'a Glyphs,
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        for row in 0..3 {
            for col in 0..3 {
                write!(f, " | {} | ", self.glyphs.cell(self.board.tile(Coord::new(row, col))))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", SEPARATOR)
    }
}

impl Display for InvalidGlyphs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "glyphs '{}' and '{}' must be distinct visible characters",
            self.a.escape_debug(),
            self.b.escape_debug()
        )
    }
}

impl Error for InvalidGlyphs {}
