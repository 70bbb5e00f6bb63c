//! Various utility functions.
pub mod bot_game;
pub mod tiny;
