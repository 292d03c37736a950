//! Game session: the current board plus the moves that built it.

use super::invariants::{GameInvariants, InvariantSet, is_monotonic};
use super::rules::{Evaluation, Outcome, apply_move, evaluate};
use super::{Board, Move, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A game in play.
///
/// The outcome is always recomputed from the board so it can never drift
/// out of sync with the squares. Deserializing replays the recorded history,
/// so a saved game passes the same checks as one played move by move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    board: Board,
    history: Vec<Position>,
}

/// Serialized form of a [`Game`] before its history is replayed.
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    history: Vec<Position>,
}

impl TryFrom<GameRecord> for Game {
    type Error = MoveError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Game::new();
        for pos in record.history {
            game.make_move(pos)?;
        }
        if game.board != record.board {
            return Err(MoveError::InvariantViolation(format!(
                "Board {} does not match its history",
                record.board
            )));
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Evaluates the current board.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(&self.board)
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.evaluation().outcome
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Plays the side to move at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn make_move(&mut self, pos: Position) -> Result<Evaluation, MoveError> {
        self.place(Move::new(self.to_move(), pos))
    }

    /// Applies a move after checking it is that player's turn.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn place(&mut self, mov: Move) -> Result<Evaluation, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move() {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        let index = mov.position.to_index();
        let next = apply_move(&self.board, index, mov.player)?;
        if !is_monotonic(&self.board, &next, index) {
            return Err(MoveError::InvariantViolation(
                "Move changed more than its own square".to_string(),
            ));
        }

        let mut candidate = self.clone();
        candidate.board = next;
        candidate.history.push(mov.position);
        GameInvariants::check_all(&candidate).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        *self = candidate;
        let evaluation = self.evaluation();
        debug!(outcome = ?evaluation.outcome, "Move accepted");
        Ok(evaluation)
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_alternates_players() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Position::Center).player(), Some(Player::X));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new();
        let result = game.place(Move::new(Player::O, Position::Center));
        assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
        assert!(game.history().is_empty());
    }
}
