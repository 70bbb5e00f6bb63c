use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the two marks that can occupy a cell.
///
/// `A` is the human side and `B` the computer side. How a mark is drawn is decided at render time,
/// see [Glyphs](crate::interface::render::Glyphs).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark {
    A,
    B,
}

/// The content of a single cell, `None` if the cell is empty.
pub type Cell = Option<Mark>;

/// The absolute outcome for a finished game.
///
/// An unfinished game is represented as `None` wherever an `Option<Outcome>` is returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Mark),
    Draw,
}

/// The reason a move was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    OutOfRange,
    Occupied,
}

impl Mark {
    pub const BOTH: [Mark; 2] = [Mark::A, Mark::B];

    pub fn other(self) -> Mark {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// The character used for this mark in the compact board notation.
    pub fn to_char(self) -> char {
        match self {
            Mark::A => 'a',
            Mark::B => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'a' => Some(Mark::A),
            'b' => Some(Mark::B),
            _ => None,
        }
    }
}

impl Outcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::WonBy(mark) => Some(mark),
            Outcome::Draw => None,
        }
    }
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::OutOfRange => write!(f, "Row and column must be between 0 and 2."),
            PlayError::Occupied => write!(f, "That cell is already taken."),
        }
    }
}

impl Error for PlayError {}
