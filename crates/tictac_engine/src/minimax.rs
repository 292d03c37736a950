//! Exhaustive minimax move selection.
//!
//! O is the maximizing side and X the minimizing side: an O win scores `+1`,
//! an X win `-1`, a draw `0`. The 3x3 tree is small enough (at most 9! leaves)
//! to search completely on every call, so there is no pruning, no heuristic
//! and no cache.

use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax score from O's point of view, always one of `-1`, `0`, `1`.
pub type Score = i8;

/// Best move found by the search and the score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen cell index; `None` when the board is terminal or full.
    pub index: Option<usize>,
    /// Game-theoretic value of the board with the chosen move played.
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self { index: None, score }
    }

    /// Chosen cell as a [`Position`].
    pub fn position(&self) -> Option<Position> {
        self.index.and_then(Position::from_index)
    }
}

/// Selects the optimal move for `side`, assuming perfect play afterwards.
///
/// Candidates are scanned in increasing index order and only a strictly
/// better score replaces the running best, so the lowest index wins ties.
/// The caller's board is never modified; each hypothetical move is played
/// on a private copy.
#[instrument(skip(board), fields(board = %board))]
pub fn select_move(board: &Board, side: Player) -> SearchResult {
    let mut nodes = 0u64;
    let result = minimax(board, side, &mut nodes);
    debug!(
        nodes,
        index = ?result.index,
        score = result.score,
        "Search complete"
    );
    result
}

fn leaf_score(outcome: Outcome) -> Option<Score> {
    match outcome {
        Outcome::OWins => Some(1),
        Outcome::XWins => Some(-1),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

fn minimax(board: &Board, side: Player, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    if let Some(score) = leaf_score(evaluate(board).outcome) {
        return SearchResult::leaf(score);
    }

    let mut best: Option<(usize, Score)> = None;
    for index in board.empty_indices() {
        let child = board.with_mark(index, side);
        let score = minimax(&child, side.opponent(), nodes).score;

        let improves = match best {
            None => true,
            Some((_, best_score)) if side.is_maximizing() => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) => SearchResult {
            index: Some(index),
            score,
        },
        None => SearchResult::leaf(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let result = select_move(&board("XXX.OO..."), Player::O);
        assert_eq!(result, SearchResult::leaf(-1));

        let result = select_move(&board("XOXXOOOXX"), Player::X);
        assert_eq!(result, SearchResult::leaf(0));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O . / X X . / X . .  with O to move: index 2 completes the top row.
        let result = select_move(&board("OO.XX.X.."), Player::O);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let before = board("X...O....");
        let snapshot = before;
        let _ = select_move(&before, Player::X);
        assert_eq!(before, snapshot);
    }
}
