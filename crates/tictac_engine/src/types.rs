//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, minimizing side in the search).
    X,
    /// Player O (goes second, maximizing side in the search).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Whether the search maximizes the score for this side.
    pub fn is_maximizing(self) -> bool {
        self == Player::O
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A board that could not be built from its textual or slice form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The input did not describe exactly nine cells.
    #[display("Board must have 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A cell held something other than X, O or an empty marker.
    #[display("Invalid mark {:?} (expected X, O, '.', '_' or '-')", _0)]
    InvalidMark(char),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every operation that places a mark
/// returns a new board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::CELLS],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index (0-8).
    pub fn square(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of empty squares in increasing order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Side to move, inferred from the mark counts. X always opens.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Whether the mark counts could arise from alternating play with X first.
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Copy of this board with `index` set to `player`. Does not validate.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.squares[index] = Square::Occupied(player);
        next
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    fn try_from(squares: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength(squares.len()))?;
        Ok(Self { squares })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells such as `"XX_ _OO ___"` or `"x.o|...|..x"`.
    ///
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardError::InvalidMark(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::try_from(squares.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
