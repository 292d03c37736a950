//! One-shot board analysis for the `analyze` command.

use serde::Serialize;
use tictac_engine::{Board, Evaluation, Player, SearchResult, evaluate, select_move};
use tracing::{instrument, warn};

/// Everything the engine can say about one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact form.
    pub board: String,
    /// Outcome and winning line.
    pub evaluation: Evaluation,
    /// Side the search played for.
    pub side_to_move: Player,
    /// Optimal move; absent for finished games.
    pub best_move: Option<SearchResult>,
    /// Whether the mark counts fit alternating play with X first.
    pub consistent: bool,
}

/// Evaluates `board` and, if the game is still going, searches for `side`.
///
/// `side` defaults to the side implied by the mark counts.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, side: Option<Player>) -> Analysis {
    let consistent = board.is_consistent();
    if !consistent {
        warn!("Mark counts do not fit alternating play");
    }

    let evaluation = evaluate(board);
    let side_to_move = side.unwrap_or_else(|| board.to_move());
    let best_move = if evaluation.outcome.is_terminal() {
        None
    } else {
        Some(select_move(board, side_to_move))
    };

    Analysis {
        board: board.to_string(),
        evaluation,
        side_to_move,
        best_move,
        consistent,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Ok(board) = self.board.parse::<Board>() {
            writeln!(f, "{}", board.display())?;
            writeln!(f)?;
        }
        writeln!(f, "Outcome: {:?}", self.evaluation.outcome)?;
        if let Some(line) = self.evaluation.winning_line {
            writeln!(f, "Winning line: {} {:?}", line, line.cells())?;
        }
        if !self.consistent {
            writeln!(f, "Warning: mark counts do not fit alternating play")?;
        }
        if let Some(result) = &self.best_move {
            let best = result
                .position()
                .map(|pos| format!("{} (cell {})", pos, pos.to_index() + 1))
                .unwrap_or_else(|| "none".to_string());
            writeln!(f, "Best move for {}: {}", self.side_to_move, best)?;
            writeln!(f, "Score: {}", result.score)?;
        }
        Ok(())
    }
}
