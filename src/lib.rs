#![warn(missing_debug_implementations)]

//! Console [Tic Tac Toe](https://en.wikipedia.org/wiki/Tic-tac-toe) against a rule-based computer opponent.
//!
//! The crate is split into:
//! * The board itself, [TTTBoard](crate::games::ttt::TTTBoard),
//!   with the shared types [Mark](crate::board::Mark) and [Outcome](crate::board::Outcome).
//! * Bots that pick moves on a board, see [Bot](crate::ai::Bot):
//!   * [MoveSelector](crate::ai::heuristic::MoveSelector),
//!     which wins if it can, otherwise blocks, otherwise prefers the center, then the corners.
//!   * [RandomBot](crate::ai::simple::RandomBot),
//!     which simply picks a random empty cell.
//! * The console front end in [interface](crate::interface), generic over its input and output streams.
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## Let the computer answer a move.
//!
//! ```
//! # use ttt_console::ai::heuristic::{MoveOutcome, MoveSelector};
//! # use ttt_console::board::Mark;
//! # use ttt_console::games::ttt::{Coord, TTTBoard};
//! # use ttt_console::util::tiny::consistent_rng;
//! let mut board = TTTBoard::default();
//! assert!(board.make_move(0, 0, Mark::A));
//!
//! let mut selector = MoveSelector::new(Mark::B, consistent_rng());
//! assert_eq!(MoveOutcome::MoveMade(Coord::CENTER), selector.play(&mut board));
//! println!("{}", board);
//! ```
//!
//! ## Play a scripted console game.
//!
//! ```
//! # use ttt_console::config::GameConfig;
//! let input = "0\n0\n";
//! let mut output = vec![];
//!
//! let mut game = GameConfig::default().console_game(input.as_bytes(), &mut output);
//! // the input runs out before the game is over
//! assert_eq!(None, game.run().unwrap());
//! ```

pub mod board;

pub mod wdl;

pub mod ai;

pub mod games;

pub mod config;

pub mod util;

pub mod interface;
