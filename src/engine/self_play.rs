//! Self-play demonstrates the engine: both sides play the optimal action from
//! the initial board until the game is over. Under optimal play the game
//! always ends in a tie.

use std::io::Write;

use crate::engine::status;
use crate::game::board::Board;
use crate::search;

/// Plays a complete game of optimal play against itself, writing every move
/// and the final board to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn selfplay(out: &mut dyn Write) -> anyhow::Result<()> {
    let mut board = Board::initial();
    while let (Some(result), Some(player)) = (search::search(&board), board.player()) {
        board = board.result(result.best_action)?;
        writeln!(
            out,
            "{player} plays {} (value {}, {} nodes)",
            result.best_action, result.value, result.nodes
        )?;
    }
    write!(out, "{board:?}")?;
    writeln!(out, "Result: {}", status(&board))?;
    Ok(())
}
