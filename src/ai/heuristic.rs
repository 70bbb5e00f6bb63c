//! The rule-based computer opponent.
//!
//! [MoveSelector] tries a fixed list of [Rule]s in order and plays on the first cell one of them yields:
//! * [Rule::Win]: complete one of its own lines,
//! * [Rule::Block]: occupy the cell that would complete an opponent line,
//! * [Rule::Center]: take the center,
//! * [Rule::Corner]: take a random free corner,
//! * [Rule::Random]: take any random free cell.
//!
//! This is not a perfect player, it can be beaten with a fork.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;
use tracing::debug;

use crate::ai::Bot;
use crate::board::Mark;
use crate::games::ttt::{Coord, TTTBoard};

/// The rule that decided a move, in priority order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rule {
    Win,
    Block,
    Center,
    Corner,
    Random,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Choice {
    pub coord: Coord,
    pub rule: Rule,
}

/// The result of [MoveSelector::play].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveOutcome {
    /// The move completed a line, the game is over.
    ComputerWon(Coord),
    /// A move was played and the game may continue.
    MoveMade(Coord),
    /// The board was already full, nothing was played.
    NoMoveAvailable,
}

pub struct MoveSelector<R: Rng> {
    mark: Mark,
    rng: R,
}

impl<R: Rng> Debug for MoveSelector<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MoveSelector {{ mark: {:?} }}", self.mark)
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(mark: Mark, rng: R) -> Self {
        MoveSelector { mark, rng }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Decide on a move for this selector's mark without modifying `board`.
    /// Returns `None` if there is no empty cell.
    pub fn choose(&mut self, board: &TTTBoard) -> Option<Choice> {
        self.choose_for(board, self.mark)
    }

    /// Decide on a move and play it on `board`.
    pub fn play(&mut self, board: &mut TTTBoard) -> MoveOutcome {
        match self.choose(board) {
            None => {
                debug!(mark = ?self.mark, "no empty cell left");
                MoveOutcome::NoMoveAvailable
            }
            Some(choice) => {
                debug!(mark = ?self.mark, cell = %choice.coord, rule = ?choice.rule, "playing move");
                board.play(choice.coord, self.mark);

                match choice.rule {
                    Rule::Win => MoveOutcome::ComputerWon(choice.coord),
                    _ => MoveOutcome::MoveMade(choice.coord),
                }
            }
        }
    }

    fn choose_for(&mut self, board: &TTTBoard, mark: Mark) -> Option<Choice> {
        let choice = |coord, rule| Some(Choice { coord, rule });

        if let Some(coord) = winning_cell(board, mark) {
            return choice(coord, Rule::Win);
        }
        if let Some(coord) = winning_cell(board, mark.other()) {
            return choice(coord, Rule::Block);
        }
        if board.tile(Coord::CENTER).is_none() {
            return choice(Coord::CENTER, Rule::Center);
        }

        let corners: Vec<Coord> = Coord::CORNERS
            .iter()
            .copied()
            .filter(|&corner| board.tile(corner).is_none())
            .collect();
        if !corners.is_empty() {
            let index = self.rng.gen_range(0..corners.len());
            return choice(corners[index], Rule::Corner);
        }

        let coord = board.random_available_cell(&mut self.rng)?;
        choice(coord, Rule::Random)
    }
}

impl<R: Rng> Bot for MoveSelector<R> {
    fn select_move(&mut self, board: &TTTBoard, mark: Mark) -> Option<Coord> {
        self.choose_for(board, mark).map(|choice| choice.coord)
    }
}

/// The first empty cell in row-major order where `mark` would complete a line, if any.
pub fn winning_cell(board: &TTTBoard, mark: Mark) -> Option<Coord> {
    board
        .available_cells()
        .find_map(|coord| if board.would_win(coord, mark) { Some(coord) } else { None })
}
