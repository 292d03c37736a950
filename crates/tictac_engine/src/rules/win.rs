//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// One of the eight triples that ends the game when filled by one player.
///
/// The string form is the tag a renderer uses to draw the strike-through.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum WinningLine {
    /// Top row.
    #[strum(serialize = "strike-row-1")]
    TopRow,
    /// Middle row.
    #[strum(serialize = "strike-row-2")]
    MiddleRow,
    /// Bottom row.
    #[strum(serialize = "strike-row-3")]
    BottomRow,
    /// Left column.
    #[strum(serialize = "strike-column-1")]
    LeftColumn,
    /// Center column.
    #[strum(serialize = "strike-column-2")]
    CenterColumn,
    /// Right column.
    #[strum(serialize = "strike-column-3")]
    RightColumn,
    /// Top-left to bottom-right.
    #[strum(serialize = "strike-diagonal-1")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(serialize = "strike-diagonal-2")]
    AntiDiagonal,
}

/// Winning lines in check order: rows top-to-bottom, columns left-to-right, diagonals.
pub const LINES: [(WinningLine, [usize; 3]); 8] = [
    (WinningLine::TopRow, [0, 1, 2]),
    (WinningLine::MiddleRow, [3, 4, 5]),
    (WinningLine::BottomRow, [6, 7, 8]),
    (WinningLine::LeftColumn, [0, 3, 6]),
    (WinningLine::CenterColumn, [1, 4, 7]),
    (WinningLine::RightColumn, [2, 5, 8]),
    (WinningLine::MainDiagonal, [0, 4, 8]),
    (WinningLine::AntiDiagonal, [2, 4, 6]),
];

impl WinningLine {
    /// Board indices covered by this line.
    pub fn cells(self) -> [usize; 3] {
        LINES[self as usize].1
    }

    /// Whether the line passes through `index`.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player holding three in a row together with the first
/// matching line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    let squares = board.squares();
    for (line, [a, b, c]) in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return sq.player().map(|player| (player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            check_winner(&board("XXX.OO...")),
            Some((Player::X, WinningLine::TopRow))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(
            check_winner(&board("XXO.O.OX.")),
            Some((Player::O, WinningLine::AntiDiagonal))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX..O....")), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WinningLine::iter() {
            let mut squares = [Square::Empty; 9];
            for index in line.cells() {
                squares[index] = Square::Occupied(Player::O);
            }
            let board = Board::from_squares(squares);
            assert_eq!(check_winner(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(WinningLine::TopRow.as_ref(), "strike-row-1");
        assert_eq!(WinningLine::RightColumn.to_string(), "strike-column-3");
        assert_eq!(WinningLine::AntiDiagonal.as_ref(), "strike-diagonal-2");
    }
}
