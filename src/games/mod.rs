//! Game implementations. Only the classic 3x3 board is supported.
pub mod ttt;
