//! Player names for a session.

use crate::mode::GameMode;
use derive_more::{Display, Error};
use tictac_engine::{Outcome, Player};
use tracing::instrument;

/// Names entered before a game could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// X has no name.
    #[display("Please enter the name for Player X.")]
    MissingPlayerX,
    /// Two humans are playing but O has no name.
    #[display("Please enter names for both players.")]
    MissingPlayerO,
}

/// Display names for both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    player_x: String,
    player_o: String,
}

impl Roster {
    /// Validates the entered names for `mode`.
    ///
    /// Against the computer, O always takes `computer_name` and whatever was
    /// typed for O is ignored.
    #[instrument]
    pub fn new(
        mode: GameMode,
        player_x: &str,
        player_o: &str,
        computer_name: &str,
    ) -> Result<Self, SetupError> {
        let player_x = player_x.trim();
        if player_x.is_empty() {
            return Err(SetupError::MissingPlayerX);
        }

        let player_o = if mode.computer_plays_o() {
            computer_name.trim()
        } else {
            player_o.trim()
        };
        if player_o.is_empty() {
            return Err(SetupError::MissingPlayerO);
        }

        Ok(Self {
            player_x: player_x.to_string(),
            player_o: player_o.to_string(),
        })
    }

    /// Name of the player using `mark`.
    pub fn name(&self, mark: Player) -> &str {
        match mark {
            Player::X => &self.player_x,
            Player::O => &self.player_o,
        }
    }

    /// Message announcing a finished game; `None` while it is still going.
    pub fn announcement(&self, outcome: Outcome) -> Option<String> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::XWins | Outcome::OWins => outcome
                .winner()
                .map(|winner| format!("Winner: {}", self.name(winner))),
            Outcome::Draw => Some("It's a draw!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_name_required() {
        assert_eq!(
            Roster::new(GameMode::Robot, "  ", "", "Robot"),
            Err(SetupError::MissingPlayerX)
        );
    }

    #[test]
    fn test_o_name_required_between_humans() {
        assert_eq!(
            Roster::new(GameMode::Human, "Ada", "", "Robot"),
            Err(SetupError::MissingPlayerO)
        );
    }

    #[test]
    fn test_computer_takes_its_own_name() {
        let roster = Roster::new(GameMode::Robot, "Ada", "Grace", "Robot").unwrap();
        assert_eq!(roster.name(Player::X), "Ada");
        assert_eq!(roster.name(Player::O), "Robot");
    }

    #[test]
    fn test_announcements() {
        let roster = Roster::new(GameMode::Human, "Ada", "Grace", "Robot").unwrap();
        assert_eq!(roster.announcement(Outcome::InProgress), None);
        assert_eq!(
            roster.announcement(Outcome::OWins).as_deref(),
            Some("Winner: Grace")
        );
        assert_eq!(
            roster.announcement(Outcome::Draw).as_deref(),
            Some("It's a draw!")
        );
    }
}
