//! Implements exhaustive [Minimax] search over the complete Tic-Tac-Toe game
//! tree. X is the maximizing player and O is the minimizing one: values are
//! always reported from X's perspective (see
//! [`crate::game::board::Board::utility`]).
//!
//! The game tree is small enough (549 945 nodes below the empty board) for the
//! search to visit every node without pruning, caching or depth limits.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use crate::game::core::Action;

mod minimax;
mod state;

pub use minimax::{evaluate, minimax, search};

/// Outcome of [`search`]: the action to play together with its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The first action (in
    /// [`crate::game::board::Board::actions`] order) that achieves the best
    /// value for the player to move.
    pub best_action: Action,
    /// Game-theoretic value of `best_action`: `1` if X wins, `-1` if O wins
    /// and `0` for a tie under optimal play from both sides.
    pub value: i8,
    /// Number of boards the value functions visited.
    pub nodes: u64,
}
