//! The console front end: input parsing, rendering and the game loop.
pub mod console;
pub mod input;
pub mod render;
