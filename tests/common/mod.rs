use std::collections::HashSet;

use noughts::game::board::Board;

pub(crate) fn setup(input: &str) -> Board {
    Board::try_from(input).unwrap_or_else(|e| panic!("parsing valid board {input}: {e:#}"))
}

/// Collects every board that can occur in a game, starting from the initial
/// one and applying legal actions until the game is over.
pub(crate) fn reachable_boards() -> Vec<Board> {
    let mut visited = HashSet::new();
    let mut boards = vec![];
    let mut stack = vec![Board::initial()];
    while let Some(board) = stack.pop() {
        if !visited.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for action in board.actions() {
            stack.push(board.result(action).expect("enumerated actions are legal"));
        }
    }
    boards
}
