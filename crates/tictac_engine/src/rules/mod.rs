//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the search and the session type share one evaluator.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use super::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Status of a board. Always derived from the board, never stored beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}

/// Outcome of a board plus the line that produced a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game status.
    pub outcome: Outcome,
    /// Line that won the game; `None` unless the outcome is a win.
    pub winning_line: Option<WinningLine>,
}

/// Evaluates a board.
///
/// Triples are checked rows first, then columns, then diagonals; the first
/// complete triple decides the winner. A full board with no triple is a draw.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation {
            outcome: Outcome::won_by(player),
            winning_line: Some(line),
        };
    }

    let outcome = if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };

    Evaluation {
        outcome,
        winning_line: None,
    }
}

/// Places `mark` at `index`, returning the new board.
///
/// The input board is never modified. A move onto an occupied square,
/// outside the grid, or on a finished game is rejected before any change.
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(board: &Board, index: usize, mark: Player) -> Result<Board, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if evaluate(board).outcome.is_terminal() {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(position) {
        return Err(MoveError::SquareOccupied(position));
    }

    let next = board.with_mark(index, mark);
    trace!(next = %next, "Move applied");
    Ok(next)
}
