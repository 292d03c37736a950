//! Invariants for a game in play.
//!
//! Each invariant is a logical property of [`Game`] checked after every move.
//! They are small enough to test independently.

use super::{Board, Game, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X and O counts differ by at most one, with X never behind.
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        game.board().is_consistent()
    }

    fn description() -> &'static str {
        "Players alternate with X first"
    }
}

/// The board holds exactly the marks recorded in the history.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        let mut player = Player::X;
        let replayed = game.history().iter().all(|pos| {
            let matches = game.board().get(*pos) == Square::Occupied(player);
            player = player.opponent();
            matches
        });

        occupied == game.history().len() && replayed
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}

/// At most one player has completed a line.
pub struct SingleWinner;

impl Invariant<Game> for SingleWinner {
    fn holds(game: &Game) -> bool {
        let squares = game.board().squares();
        let completed_by = |player: Player| {
            super::rules::LINES
                .iter()
                .any(|(_, cells)| cells.iter().all(|i| squares[*i] == Square::Occupied(player)))
        };
        !(completed_by(Player::X) && completed_by(Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a winning line"
    }
}

/// Every invariant checked after a move.
pub type GameInvariants = (AlternatingTurn, HistoryConsistent, SingleWinner);

/// A move only fills one empty square and leaves every other square alone.
pub fn is_monotonic(before: &Board, after: &Board, index: usize) -> bool {
    before
        .squares()
        .iter()
        .zip(after.squares())
        .enumerate()
        .all(|(i, (b, a))| {
            if i == index {
                *b == Square::Empty && *a != Square::Empty
            } else {
                b == a
            }
        })
}
