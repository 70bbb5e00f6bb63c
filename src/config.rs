//! Settings for a console game, usually filled in from the command line.
use std::io::{BufRead, Write};

use rand::rngs::SmallRng;

use crate::interface::console::ConsoleGame;
use crate::interface::render::Glyphs;
use crate::util::tiny::seeded_rng;

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub glyphs: Glyphs,
    /// Seed for the computer's random choices, `None` to seed from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn rng(&self) -> SmallRng {
        seeded_rng(self.seed)
    }

    pub fn console_game<I: BufRead, O: Write>(&self, input: I, output: O) -> ConsoleGame<I, O, SmallRng> {
        ConsoleGame::new(input, output, self.glyphs, self.rng())
    }
}
