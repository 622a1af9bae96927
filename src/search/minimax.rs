//! Implementation of the [Minimax] algorithm as two mutually recursive value
//! functions: `max_value` for boards where X is to move and `min_value`
//! for boards where O is to move.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use tracing::{debug, instrument};

use crate::game::board::Board;
use crate::game::core::{Action, Player};
use crate::search::state::State;
use crate::search::SearchResult;

/// Best value X can force from the board, assuming X is to move.
fn max_value(state: &mut State, board: &Board) -> i8 {
    state.visit();
    if board.is_terminal() {
        return board.utility();
    }
    board
        .actions()
        .into_iter()
        .map(|action| min_value(state, &board.place(action, Player::X)))
        .max()
        .unwrap_or_else(|| board.utility())
}

/// Best value O can force from the board, assuming O is to move.
fn min_value(state: &mut State, board: &Board) -> i8 {
    state.visit();
    if board.is_terminal() {
        return board.utility();
    }
    board
        .actions()
        .into_iter()
        .map(|action| max_value(state, &board.place(action, Player::O)))
        .min()
        .unwrap_or_else(|| board.utility())
}

/// Scores a board where `player` is to move with that player's value function.
fn value(state: &mut State, board: &Board, player: Player) -> i8 {
    match player {
        Player::X => max_value(state, board),
        Player::O => min_value(state, board),
    }
}

/// Searches the whole game tree below `board` and returns the optimal action
/// for the player to move, its value and search statistics.
///
/// Every legal action is scored by the opponent's value function applied to
/// the resulting board. A later action replaces the current best only if it is
/// strictly better, so among equally good actions the first one in
/// [`Board::actions`] order is returned.
///
/// Returns `None` if the game is over or neither player can move.
///
/// ```
/// use noughts::game::board::Board;
/// use noughts::game::core::Action;
///
/// let board = Board::try_from("XX./OO./...").unwrap();
/// let result = noughts::search::search(&board).unwrap();
/// assert_eq!(result.best_action, Action::new(0, 2));
/// assert_eq!(result.value, 1);
/// ```
#[must_use]
#[instrument(level = "debug", skip_all, fields(board = %board))]
pub fn search(board: &Board) -> Option<SearchResult> {
    if board.is_terminal() {
        return None;
    }
    let player = board.player()?;
    let mut state = State::new();
    let mut best: Option<(Action, i8)> = None;
    for action in board.actions() {
        let candidate = value(&mut state, &board.place(action, player), !player);
        // Update the best action only if the explored one leads to a strictly
        // better result for the player to move.
        let improves = best.map_or(true, |(_, best_value)| match player {
            Player::X => candidate > best_value,
            Player::O => candidate < best_value,
        });
        if improves {
            best = Some((action, candidate));
        }
    }
    let (best_action, value) = best?;
    let nodes = state.searched_nodes();
    debug!(action = %best_action, value, nodes, "search finished");
    Some(SearchResult {
        best_action,
        value,
        nodes,
    })
}

/// Returns the optimal action for the player to move, or `None` if the game is
/// already over.
///
/// ```
/// use noughts::game::board::Board;
/// use noughts::game::core::Action;
/// use noughts::search::minimax;
///
/// assert_eq!(minimax(&Board::initial()), Some(Action::new(0, 0)));
/// assert_eq!(minimax(&Board::try_from("XXX/OO./...").unwrap()), None);
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    search(board).map(|result| result.best_action)
}

/// Returns the game-theoretic value of the board from X's perspective: the
/// utility of a finished game or the outcome of optimal play from both sides.
#[must_use]
pub fn evaluate(board: &Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }
    board
        .player()
        .map_or_else(|| board.utility(), |player| value(&mut State::new(), board, player))
}
