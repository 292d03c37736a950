//! Command-line interface for tictac.

use crate::mode::GameMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_engine::Player;

/// Tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "tictac.toml")]
        config: PathBuf,

        /// Game mode (skips the mode selection screen)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Name of the player using X
        #[arg(long)]
        x_name: Option<String>,

        /// Name of the player using O (human mode only)
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Evaluate a board and print the optimal move
    Analyze {
        /// Nine cells in reading order using X, O and '.' for empty, e.g. "XX..O...."
        board: String,

        /// Side to move (inferred from the mark counts by default)
        #[arg(short, long, value_enum)]
        side: Option<Side>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Side argument for `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The X player.
    X,
    /// The O player.
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
