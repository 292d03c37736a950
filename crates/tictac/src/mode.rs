//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two people share the keyboard.
    Human,
    /// X is a person, O is the minimax search.
    #[default]
    Robot,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Human => "Human vs Human",
            GameMode::Robot => "Human vs Robot",
        }
    }

    /// Whether O is played by the computer.
    pub fn computer_plays_o(&self) -> bool {
        *self == GameMode::Robot
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            GameMode::Human => GameMode::Robot,
            GameMode::Robot => GameMode::Human,
        }
    }
}
