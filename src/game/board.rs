//! Provides the Tic-Tac-Toe [`Board`]: the full state of the game, the rule
//! queries over it (side to move, legal actions, winner, terminal state) and
//! the only way to produce the next state, [`Board::result`].
//!
//! The board is a small `Copy` value. Applying an action never mutates the
//! board it is applied to: the result is an independent copy, so the sibling
//! branches of the search tree can never alias.

use std::fmt;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::game::core::{Action, Cell, Player, BOARD_SIZE, BOARD_WIDTH};

/// Every line of three cells that wins the game: three rows, three columns and
/// two diagonals, as row-major cell indices.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// Legal actions in a position. There are never more than [`BOARD_SIZE`] of
/// them, so they are stored inline.
pub type Actions = ArrayVec<Action, BOARD_SIZE>;

/// Reasons for [`Board::result`] to reject an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Either coordinate does not fit on the 3×3 board.
    #[error("action ({}, {}) is out of bounds", .0.row(), .0.column())]
    OutOfBounds(Action),
    /// The target cell is already marked.
    #[error("cell ({}, {}) is already occupied", .0.row(), .0.column())]
    CellOccupied(Action),
    /// Mark counts do not determine whose turn it is: the board could not have
    /// been reached by alternating play.
    #[error("no player to move")]
    NoPlayer,
}

/// State of the Tic-Tac-Toe game: the contents of the nine cells in row-major
/// order. The side to move is not stored, it is derived from the marks.
///
/// [`Board::try_from()`] parses the compact notation which has three rows
/// separated by `/`, e.g. `XX./OO./...`. [`fmt::Display`] prints it back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates the empty board the game starts from.
    ///
    /// ```
    /// use noughts::game::board::Board;
    /// use noughts::game::core::Player;
    ///
    /// let board = Board::initial();
    /// assert_eq!(board.to_string(), ".../.../...");
    /// assert_eq!(board.player(), Some(Player::X));
    /// assert_eq!(board.actions().len(), 9);
    /// ```
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Returns the contents of the cell or `None` if the coordinates are off
    /// the board.
    #[must_use]
    pub fn at(&self, action: Action) -> Option<Cell> {
        action.in_bounds().then(|| self.cells[action.index()])
    }

    fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Returns the player who has the next turn. X moves first, so equal mark
    /// counts mean it is X's turn and one extra X means it is O's turn.
    ///
    /// Any other relation between the counts can not be reached by alternating
    /// play and yields `None`.
    #[must_use]
    pub fn player(&self) -> Option<Player> {
        let (x, o) = (self.count(Player::X), self.count(Player::O));
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Calculates all legal actions: the coordinates of every empty cell, in
    /// row-major order.
    #[must_use]
    pub fn actions(&self) -> Actions {
        self.cells
            .iter()
            .positions(|cell| cell.is_empty())
            .map(Action::from_index)
            .collect()
    }

    /// Returns the board after the player to move marks the cell `action`
    /// points to. The board itself is left untouched.
    ///
    /// ```
    /// use noughts::game::board::{Board, MoveError};
    /// use noughts::game::core::{Action, Cell};
    ///
    /// let board = Board::initial();
    /// let next = board.result(Action::new(1, 1)).unwrap();
    /// assert_eq!(next.at(Action::new(1, 1)), Some(Cell::X));
    /// assert_eq!(board, Board::initial());
    /// assert_eq!(
    ///     next.result(Action::new(1, 1)),
    ///     Err(MoveError::CellOccupied(Action::new(1, 1)))
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the action is off the board.
    /// - [`MoveError::CellOccupied`] if the cell is already marked.
    /// - [`MoveError::NoPlayer`] if the mark counts do not allow either player
    ///   to move.
    pub fn result(&self, action: Action) -> Result<Self, MoveError> {
        if !action.in_bounds() {
            return Err(MoveError::OutOfBounds(action));
        }
        if !self.cells[action.index()].is_empty() {
            return Err(MoveError::CellOccupied(action));
        }
        let player = self.player().ok_or(MoveError::NoPlayer)?;
        Ok(self.place(action, player))
    }

    /// Marks the cell for `player` on a copy of the board without checking the
    /// rules. The caller guarantees that the action is legal.
    #[must_use]
    pub(crate) fn place(&self, action: Action, player: Player) -> Self {
        debug_assert!(action.in_bounds());
        debug_assert!(self.cells[action.index()].is_empty());
        let mut next = *self;
        next.cells[action.index()] = player.into();
        next
    }

    /// Returns the owner of a completed line, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winners().next()
    }

    /// All completed lines' owners. A board reached by alternating play has at
    /// most one winner, although it may own two lines at once.
    fn winners(&self) -> impl Iterator<Item = Player> + '_ {
        LINES.iter().filter_map(|&[a, b, c]| {
            let owner = self.cells[a].owner()?;
            (self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c]).then_some(owner)
        })
    }

    /// Returns `true` if the game is over: either a line is completed or no
    /// empty cell is left (tie).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Value of the game outcome from X's perspective: `1` if X has won, `-1`
    /// if O has won and `0` otherwise (tie or unfinished game).
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Checks whether the board could be reached from [`Board::initial`] by
    /// alternating play: mark counts allow a side to move, at most one player
    /// owns a completed line and that player made the last move.
    ///
    /// ```
    /// use noughts::game::board::Board;
    ///
    /// assert!(Board::try_from("XXX/OO./...").unwrap().is_legal());
    /// // O could not have moved after X completed the top row.
    /// assert!(!Board::try_from("XXX/OO./O..").unwrap().is_legal());
    /// ```
    #[must_use]
    pub fn is_legal(&self) -> bool {
        let Some(player) = self.player() else {
            return false;
        };
        if !self.winners().all_equal() {
            return false;
        }
        // The game ends with the winning move, so the winner moved last.
        self.winner().map_or(true, |winner| winner == !player)
    }

    /// Parses the board from the compact notation: three rows separated by
    /// `/`, each consisting of exactly three cells. Cells are `X`, `O` (in
    /// either case) or `.` for an empty cell (`-` and `_` are also accepted).
    ///
    /// NOTE: Only the shape of the input is validated. Use [`Board::is_legal`]
    /// to check whether the board could occur in a real game.
    pub fn from_notation(input: &str) -> anyhow::Result<Self> {
        let mut result = Self::initial();
        let rows = input.split('/').collect_vec();
        if rows.len() != BOARD_WIDTH as usize {
            bail!(
                "incorrect board: expected {BOARD_WIDTH} rows, got {} in '{input}'",
                rows.len()
            );
        }
        for (row, symbols) in rows.into_iter().enumerate() {
            let cells = symbols
                .chars()
                .map(Cell::try_from)
                .collect::<anyhow::Result<Vec<_>>>()?;
            if cells.len() != BOARD_WIDTH as usize {
                bail!(
                    "incorrect board: row size should be exactly {BOARD_WIDTH}, got '{symbols}'"
                );
            }
            let start = row * BOARD_WIDTH as usize;
            result.cells[start..start + cells.len()].copy_from_slice(&cells);
        }
        Ok(result)
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Cleans up the input (surrounding whitespace and an optional `board`
    /// prefix) before parsing the notation.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        let input = input.strip_prefix("board ").unwrap_or(input);
        Self::from_notation(input.trim())
    }
}

impl fmt::Display for Board {
    /// Prints the board in the compact notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.iter().join(""))
            .join("/");
        write!(f, "{rows}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_WIDTH as usize) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        match self.player() {
            Some(player) => writeln!(f, "Player to move: {player}")?,
            None => writeln!(f, "Player to move: none")?,
        }
        writeln!(f, "Notation: {self}")?;
        Ok(())
    }
}

/// [Perft] (*per*formance *t*esting) counts the leaf nodes of the game tree
/// rooted at `board` up to `depth` plies. Terminal boards are leaves regardless
/// of the remaining depth, so from [`Board::initial`] any depth of 9 or more
/// counts every possible game: 255 168.
///
/// This checks the correctness of [`Board::actions`], [`Board::result`] and
/// [`Board::is_terminal`] at once.
///
/// [Perft]: https://www.chessprogramming.org/Perft
#[must_use]
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 || board.is_terminal() {
        return 1;
    }
    let Some(player) = board.player() else {
        return 1;
    };
    board
        .actions()
        .into_iter()
        .map(|action| perft(&board.place(action, player), depth - 1))
        .sum()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup(notation: &str) -> Board {
        let board = Board::try_from(notation);
        assert!(board.is_ok(), "input: {notation}");
        board.unwrap()
    }

    #[test]
    fn initial() {
        let board = Board::initial();
        assert_eq!(board, Board::default());
        assert_eq!(board.player(), Some(Player::X));
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
        assert!(board.is_legal());
    }

    #[test]
    fn notation() {
        for notation in ["XX./OO./...", ".../.X./...", "XOX/XOO/OXX", "X.O/.X./O.X"] {
            assert_eq!(setup(notation).to_string(), notation);
        }
        assert_eq!(setup("  board xo./.../... \n").to_string(), "XO./.../...");
        assert_eq!(setup("x-_/.o./...").to_string(), "X../.O./...");
    }

    #[test]
    fn incorrect_notation() {
        assert!(Board::try_from("").is_err());
        assert!(Board::try_from("XX./OO.").is_err());
        assert!(Board::try_from("XX./OO./.../...").is_err());
        assert!(Board::try_from("XX../OO./...").is_err());
        assert!(Board::try_from("XX/OO./...").is_err());
        assert!(Board::try_from("XX./OZ./...").is_err());
    }

    #[test]
    fn debug_grid() {
        assert_eq!(
            format!("{:?}", setup("XX./OO./...")),
            "X X .\nO O .\n. . .\nPlayer to move: X\nNotation: XX./OO./...\n"
        );
    }

    #[test]
    fn side_to_move() {
        assert_eq!(setup("X../.../...").player(), Some(Player::O));
        assert_eq!(setup("X../.O./...").player(), Some(Player::X));
        assert_eq!(setup("XOX/XOO/OXX").player(), Some(Player::O));
        assert_eq!(setup("XX./.../...").player(), None);
        assert_eq!(setup("O../.../...").player(), None);
    }

    #[test]
    fn actions() {
        assert_eq!(
            setup("XX./OO./...").actions().as_slice(),
            &[
                Action::new(0, 2),
                Action::new(1, 2),
                Action::new(2, 0),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
        assert!(setup("XOX/XOO/OXX").actions().is_empty());
    }

    #[test]
    fn lines() {
        assert_eq!(setup("XXX/OO./...").winner(), Some(Player::X));
        assert_eq!(setup("XX./OOO/X..").winner(), Some(Player::O));
        assert_eq!(setup("X../XO./XO.").winner(), Some(Player::X));
        assert_eq!(setup("OX./XO./X.O").winner(), Some(Player::O));
        assert_eq!(setup("O.X/OX./X..").winner(), Some(Player::X));
        assert_eq!(setup("XOX/XOO/OXX").winner(), None);
    }

    #[test]
    fn terminal() {
        let won = setup("XXX/OO./...");
        assert!(won.is_terminal());
        assert_eq!(won.utility(), 1);

        let lost = setup("XX./OOO/X..");
        assert!(lost.is_terminal());
        assert_eq!(lost.utility(), -1);

        let tie = setup("XOX/XOO/OXX");
        assert!(tie.is_terminal());
        assert_eq!(tie.utility(), 0);

        assert!(!setup("XX./OO./...").is_terminal());
    }

    #[test]
    fn result_errors() {
        let board = setup("XX./OO./...");
        assert_eq!(
            board.result(Action::new(3, 0)),
            Err(MoveError::OutOfBounds(Action::new(3, 0)))
        );
        assert_eq!(
            board.result(Action::new(0, 7)),
            Err(MoveError::OutOfBounds(Action::new(0, 7)))
        );
        assert_eq!(
            board.result(Action::new(1, 0)),
            Err(MoveError::CellOccupied(Action::new(1, 0)))
        );
        assert_eq!(
            setup("XXX/.../...").result(Action::new(2, 2)),
            Err(MoveError::NoPlayer)
        );
        // Bounds are checked before occupancy and occupancy before the turn.
        assert_eq!(
            setup("XXX/.../...").result(Action::new(0, 0)),
            Err(MoveError::CellOccupied(Action::new(0, 0)))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            MoveError::OutOfBounds(Action::new(3, 0)).to_string(),
            "action (3, 0) is out of bounds"
        );
        assert_eq!(
            MoveError::CellOccupied(Action::new(1, 2)).to_string(),
            "cell (1, 2) is already occupied"
        );
        assert_eq!(MoveError::NoPlayer.to_string(), "no player to move");
    }

    #[test]
    fn result_copies() {
        let board = setup("XX./OO./...");
        let next = board.result(Action::new(0, 2)).unwrap();
        assert_eq!(board.to_string(), "XX./OO./...");
        assert_eq!(next.to_string(), "XXX/OO./...");
        assert_eq!(next.winner(), Some(Player::X));
        assert_eq!(next.utility(), 1);
    }

    #[test]
    fn legality() {
        assert!(setup("XX./OO./...").is_legal());
        assert!(setup("XXX/OO./...").is_legal());
        // X completes two lines with the last move.
        assert!(setup("XXX/OXO/XOO").is_legal());
        assert!(!setup("XXX/OOO/...").is_legal());
        assert!(!setup("XX./.../...").is_legal());
        assert!(!setup("OO./X../...").is_legal());
        // The winner has to be the one who moved last.
        assert!(setup("OOO/XX./X..").is_legal());
        assert!(!setup("XXX/OO./O..").is_legal());
        assert!(!setup("OOX/OX./X..").is_legal());
        assert!(!setup("OOO/XX./XX.").is_legal());
    }

    #[test]
    fn perft_initial() {
        let expected = [1, 9, 72, 504, 3_024, 15_120, 56_160, 154_944, 255_168, 255_168];
        for (depth, nodes) in expected.into_iter().enumerate() {
            assert_eq!(perft(&Board::initial(), depth as u8), nodes, "depth {depth}");
        }
    }

    #[test]
    fn perft_terminal() {
        assert_eq!(perft(&setup("XXX/OO./..."), 5), 1);
        assert_eq!(perft(&setup("XOX/XOO/OXX"), 5), 1);
    }
}
