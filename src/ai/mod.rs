use std::fmt::Debug;

use crate::board::Mark;
use crate::games::ttt::{Coord, TTTBoard};

pub mod heuristic;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a cell to play `mark` on. Returns `None` only if the board has no empty cell left.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &TTTBoard, mark: Mark) -> Option<Coord>;
}
