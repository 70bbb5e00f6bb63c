use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Map;
use std::ops::{ControlFlow, Range};

use internal_iterator::InternalIterator;
use itertools::Itertools;
use rand::Rng;

use crate::board::{Cell, Mark, Outcome, PlayError};

/// A cell address on the 3x3 grid, stored as a row-major index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

/// The classic 3x3 board. The grid is the only state, whose turn it is and
/// whether the game is over are both derived by the caller from the contents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TTTBoard {
    tiles: [Cell; 9],
}

/// All 8 lines as `(row, col)` triples: rows, columns and both diagonals.
const LINES: &[[(usize, usize); 3]] = &[
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Coord {
    pub const CENTER: Coord = Coord(4);
    pub const CORNERS: [Coord; 4] = [Coord(0), Coord(2), Coord(6), Coord(8)];

    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < 3);
        assert!(col < 3);
        Coord((row * 3 + col) as u8)
    }

    /// Same as [Coord::new] but for unchecked (possibly negative) input, `None` if out of range.
    pub fn try_new(row: i64, col: i64) -> Option<Self> {
        if (0..3).contains(&row) && (0..3).contains(&col) {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn from_index(i: usize) -> Self {
        assert!(i < 9);
        Coord(i as u8)
    }

    /// All cells in row-major order.
    pub fn all() -> Map<Range<usize>, fn(usize) -> Coord> {
        let f: fn(usize) -> Coord = Coord::from_index;
        (0..9).map(f)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / 3
    }

    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl TTTBoard {
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        TTTBoard { tiles: cells }
    }

    /// The 9 cells in row-major order.
    pub fn cells(&self) -> [Cell; 9] {
        self.tiles
    }

    pub fn tile(&self, coord: Coord) -> Cell {
        self.tiles[coord.index()]
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_some())
    }

    /// Whether any of the 8 lines is completely filled with `mark`.
    pub fn is_victory(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.tile(Coord::new(row, col)) == Some(mark)))
    }

    /// Whether placing `mark` on `coord` would complete a line for `mark`.
    /// Always false for occupied cells. The board itself is never modified.
    pub fn would_win(&self, coord: Coord, mark: Mark) -> bool {
        if self.tile(coord).is_some() {
            return false;
        }

        let mut scratch = *self;
        scratch.tiles[coord.index()] = Some(mark);
        scratch.is_victory(mark)
    }

    /// The outcome of this board, `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(&mark) = Mark::BOTH.iter().find(|&&mark| self.is_victory(mark)) {
            Some(Outcome::WonBy(mark))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Place `mark` at `(row, col)` if that cell exists and is empty.
    /// Returns whether the move was played, the board is unchanged otherwise.
    pub fn make_move(&mut self, row: i64, col: i64, mark: Mark) -> bool {
        self.try_move(row, col, mark).is_ok()
    }

    /// Like [TTTBoard::make_move], but reports why a move was rejected.
    pub fn try_move(&mut self, row: i64, col: i64, mark: Mark) -> Result<Coord, PlayError> {
        let coord = Coord::try_new(row, col).ok_or(PlayError::OutOfRange)?;
        if self.tile(coord).is_some() {
            return Err(PlayError::Occupied);
        }

        self.tiles[coord.index()] = Some(mark);
        Ok(coord)
    }

    /// Place `mark` on `coord`. Panics if the cell is already occupied.
    pub fn play(&mut self, coord: Coord, mark: Mark) {
        assert!(
            self.tile(coord).is_none(),
            "Cannot play on occupied cell {} of board\n{}",
            coord,
            self
        );
        self.tiles[coord.index()] = Some(mark);
    }

    pub fn clone_and_play(&self, coord: Coord, mark: Mark) -> Self {
        let mut next = *self;
        next.play(coord, mark);
        next
    }

    /// The empty cells, in row-major order.
    pub fn available_cells(&self) -> AvailableCells<'_> {
        AvailableCells { board: self }
    }

    /// Pick a random empty cell with a uniform distribution, `None` if the board is full.
    pub fn random_available_cell(&self, rng: &mut impl Rng) -> Option<Coord> {
        let count = self.available_cells().count();
        if count == 0 {
            return None;
        }
        let index = rng.gen_range(0..count);
        self.available_cells().nth(index)
    }
}

/// Iterator over the empty cells of a board, see [TTTBoard::available_cells].
#[derive(Debug)]
pub struct AvailableCells<'a> {
    board: &'a TTTBoard,
}

impl<'a> InternalIterator for AvailableCells<'a> {
    type Item = Coord;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for coord in Coord::all() {
            if self.board.tile(coord).is_none() {
                if let ControlFlow::Break(r) = f(coord) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidCompactBoard {
    pub compact: String,
    pub reason: &'static str,
}

impl TTTBoard {
    /// Parse the compact notation: 9 cells in row-major order, `a` and `b` for the marks and `.` for empty cells.
    /// Rows may be separated by `/`, as in `ab./.b./..a`.
    pub fn from_compact(compact: &str) -> Result<TTTBoard, InvalidCompactBoard> {
        let err = |reason| InvalidCompactBoard {
            compact: compact.to_owned(),
            reason,
        };

        let chars = if compact.contains('/') {
            let rows = compact.split('/').collect_vec();
            if rows.len() != 3 || rows.iter().any(|row| row.chars().count() != 3) {
                return Err(err("Expected 3 rows of 3 cells"));
            }
            rows.iter().flat_map(|row| row.chars()).collect_vec()
        } else {
            compact.chars().collect_vec()
        };

        if chars.len() != 9 {
            return Err(err("Expected 9 cells"));
        }

        let mut tiles = [None; 9];
        for (tile, &c) in tiles.iter_mut().zip(&chars) {
            *tile = match c {
                '.' => None,
                _ => Some(Mark::from_char(c).ok_or_else(|| err("Invalid cell character"))?),
            };
        }

        Ok(TTTBoard { tiles })
    }

    pub fn to_compact(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            if row != 0 {
                result.push('/');
            }
            for col in 0..3 {
                result.push(tile_to_char(self.tile(Coord::new(row, col))));
            }
        }
        result
    }
}

fn tile_to_char(tile: Cell) -> char {
    match tile {
        Some(mark) => mark.to_char(),
        None => '.',
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Display for TTTBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+---+")?;
        for row in 0..3 {
            write!(f, "|")?;
            for col in 0..3 {
                write!(f, "{}", tile_to_char(self.tile(Coord::new(row, col))))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+---+")?;
        Ok(())
    }
}

impl Display for InvalidCompactBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid compact board '{}': {}", self.compact, self.reason)
    }
}

impl Error for InvalidCompactBoard {}
