//! Implementation of Tic-Tac-Toe rules: marks, actions and the board state.

pub mod board;
pub mod core;
