//! Utilities to run bots against each other and report the results.
use std::fmt::Write;
use std::fmt::{Debug, Formatter};

use tracing::{debug, info};

use crate::ai::Bot;
use crate::board::{Mark, Outcome};
use crate::games::ttt::{Coord, TTTBoard};
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r`, each game starting from the empty board with [Mark::A] to move.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case twice as many games are played and the bots alternate who moves first.
#[must_use]
pub fn run(bot_l: &mut impl Bot, bot_r: &mut impl Bot, games_per_side: u32, both_sides: bool) -> BotGameResult {
    let debug_l = debug_to_string(&*bot_l);
    let debug_r = debug_to_string(&*bot_r);

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };

    let mut partial_wdl = WDL::<u32>::default();
    let replays: Vec<Replay> = (0..game_count)
        .map(|game_i| {
            let flip = both_sides && game_i % 2 == 1;
            let replay = play_single_game(flip, &mut *bot_l, &mut *bot_r);

            partial_wdl += replay.outcome.pov(replay.mark_l).to_wdl();
            debug!(game = game_i, outcome = ?replay.outcome, wdl_l = ?partial_wdl, "finished game");

            replay
        })
        .collect();

    let wdl_l: WDL<u32> = replays.iter().map(|r| r.outcome.pov(r.mark_l).to_wdl::<u32>()).sum();
    info!(games = game_count, ?wdl_l, "bot game finished");

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count.max(1) as f32,
        wdl_l,
        debug_l,
        debug_r,
        replays,
    }
}

fn play_single_game(flip: bool, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let mut board = TTTBoard::default();
    let mark_l = if flip { Mark::B } else { Mark::A };

    let mut moves = vec![];
    let mut next = Mark::A;

    loop {
        match board.outcome() {
            None => {
                let mv = if next == mark_l {
                    bot_l.select_move(&board, next)
                } else {
                    bot_r.select_move(&board, next)
                };
                let mv = mv.expect("Board is not done, so there must be an empty cell");

                moves.push(mv);
                board.play(mv, next);
                next = next.other();
            }
            Some(outcome) => {
                return Replay {
                    mark_l,
                    moves,
                    outcome,
                    end: board,
                };
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub mark_l: Mark,

    pub moves: Vec<Coord>,
    pub outcome: Outcome,
    pub end: TTTBoard,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
