//! The simplest possible bot: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::Mark;
use crate::games::ttt::{Coord, TTTBoard};

/// Bot that chooses moves randomly uniformly among the empty cells.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &TTTBoard, _: Mark) -> Option<Coord> {
        board.random_available_cell(&mut self.rng)
    }
}
