//! Tic-Tac-Toe primitives commonly used within [`crate::game`].

use std::fmt;
use std::ops::Not;

use anyhow::{bail, Context};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 3;
#[allow(missing_docs)]
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_WIDTH) as usize;

/// A game of Tic-Tac-Toe is played between two players: X (having the
/// advantage of the first turn) and O.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player moving after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<char> for Player {
    type Error = anyhow::Error;

    fn try_from(mark: char) -> anyhow::Result<Self> {
        match mark {
            'X' | 'x' => Ok(Self::X),
            'O' | 'o' => Ok(Self::O),
            _ => bail!("mark should be 'X' or 'O', got '{mark}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Self::X => 'X',
                Self::O => 'O',
            }
        )
    }
}

/// Contents of a single board cell.
///
/// ```
/// use noughts::game::core::{Cell, Player};
///
/// assert_eq!(Cell::from(Player::X), Cell::X);
/// assert_eq!(Cell::Empty.owner(), None);
/// assert_eq!(Cell::O.owner(), Some(Player::O));
/// ```
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the player whose mark occupies the cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::X => Some(Player::X),
            Self::O => Some(Player::O),
        }
    }

    /// Returns `true` if neither player has marked the cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Self::X,
            Player::O => Self::O,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            '.' | '-' | '_' => Ok(Self::Empty),
            _ => Ok(Player::try_from(symbol)
                .with_context(|| format!("unknown cell symbol '{symbol}'"))?
                .into()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner() {
            Some(player) => write!(f, "{player}"),
            None => write!(f, "."),
        }
    }
}

/// Placement of the next mark: a (row, column) pair counted from the top-left
/// corner. This is the only way to change the board state.
///
/// The coordinates are not validated on construction: the board checks them
/// when the action is applied, so an out of bounds action is representable
/// and can be reported back to the caller.
///
/// Actions have a compact two-digit representation, row first:
///
/// ```
/// use noughts::game::core::Action;
///
/// let action = Action::try_from("02").unwrap();
/// assert_eq!(action, Action::new(0, 2));
/// assert_eq!(action.to_string(), "02");
/// assert_eq!(Action::try_from("2,1").unwrap(), Action::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Action {
    row: u8,
    column: u8,
}

impl Action {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns `true` if both coordinates fit on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_WIDTH && self.column < BOARD_WIDTH
    }

    /// Row-major index of the cell the action refers to. Only meaningful for
    /// in-bounds actions.
    pub(crate) const fn index(self) -> usize {
        (self.row * BOARD_WIDTH + self.column) as usize
    }

    /// Inverse of [`Action::index`].
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE);
        Self {
            row: index as u8 / BOARD_WIDTH,
            column: index as u8 % BOARD_WIDTH,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;

    /// Parses "rc", "r c" or "r,c" where both coordinates are single decimal
    /// digits. Out of bounds digits are accepted here and rejected when the
    /// action is applied.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let digits: Vec<char> = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        let [row, column] = digits.as_slice() else {
            bail!("action should consist of row and column digits, got '{input}'");
        };
        let (Some(row), Some(column)) = (row.to_digit(10), column.to_digit(10)) else {
            bail!("action coordinates should be decimal digits, got '{input}'");
        };
        Ok(Self::new(row as u8, column as u8))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}
